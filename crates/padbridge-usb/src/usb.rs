use std::time::Duration;

use rusb::{Context, DeviceHandle, UsbContext};

use crate::error::{Error, Result};
use crate::link::{Connector, ReportLink};
use crate::transfer::Transfer;

/// Vendor id of the supported pad.
pub const PAD_VENDOR_ID: u16 = 0x046d;
/// Product id of the supported pad.
pub const PAD_PRODUCT_ID: u16 = 0xc21f;
/// Interface carrying the report endpoint.
pub const REPORT_INTERFACE: u8 = 0;
/// IN endpoint the pad sends reports on.
pub const REPORT_ENDPOINT: u8 = 0x81;

/// Where and how to read reports from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbTarget {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface: u8,
    pub endpoint: u8,
    /// `Duration::ZERO` blocks until a report arrives.
    pub read_timeout: Duration,
}

impl Default for UsbTarget {
    fn default() -> Self {
        Self {
            vendor_id: PAD_VENDOR_ID,
            product_id: PAD_PRODUCT_ID,
            interface: REPORT_INTERFACE,
            endpoint: REPORT_ENDPOINT,
            read_timeout: Duration::ZERO,
        }
    }
}

/// libusb-backed [`Connector`].
pub struct UsbConnector {
    context: Context,
    target: UsbTarget,
}

impl UsbConnector {
    pub fn new(target: UsbTarget) -> Result<Self> {
        let context = Context::new().map_err(Error::Context)?;
        Ok(Self { context, target })
    }
}

impl Connector for UsbConnector {
    type Link = UsbLink;

    fn connect(&mut self) -> Result<Option<UsbLink>> {
        let UsbTarget {
            vendor_id,
            product_id,
            interface,
            ..
        } = self.target;

        let devices = self.context.devices().map_err(Error::Enumerate)?;
        let Some(device) = devices.iter().find(|device| {
            device.device_descriptor().is_ok_and(|desc| {
                desc.vendor_id() == vendor_id && desc.product_id() == product_id
            })
        }) else {
            return Ok(None);
        };

        let handle = device.open().map_err(Error::Open)?;
        let detached = match handle.kernel_driver_active(interface) {
            Ok(true) => {
                handle
                    .detach_kernel_driver(interface)
                    .map_err(|source| Error::Detach { interface, source })?;
                true
            }
            Ok(false) | Err(rusb::Error::NotSupported) => false,
            Err(source) => return Err(Error::Detach { interface, source }),
        };

        if let Err(source) = handle.claim_interface(interface) {
            if detached {
                reattach_kernel_driver(&handle, interface);
            }
            return Err(Error::Claim { interface, source });
        }

        log::debug!(
            "claimed interface {interface} of {vendor_id:04x}:{product_id:04x} on bus {} address {}",
            device.bus_number(),
            device.address()
        );
        Ok(Some(UsbLink {
            handle,
            target: self.target,
            detached,
        }))
    }
}

/// Claimed pad interface.
///
/// On drop the interface is released, the kernel driver is handed back if it
/// was detached, and the device is closed.
pub struct UsbLink {
    handle: DeviceHandle<Context>,
    target: UsbTarget,
    detached: bool,
}

impl ReportLink for UsbLink {
    fn read_report(&mut self, buf: &mut [u8]) -> Transfer {
        let expected = buf.len();
        let result = self
            .handle
            .read_bulk(self.target.endpoint, buf, self.target.read_timeout);
        Transfer::classify(result, expected)
    }
}

impl Drop for UsbLink {
    fn drop(&mut self) {
        let interface = self.target.interface;
        // The device is usually already gone here, so failures are expected.
        if let Err(e) = self.handle.release_interface(interface) {
            log::debug!("release of interface {interface} failed: {e}");
        }
        if self.detached {
            reattach_kernel_driver(&self.handle, interface);
        }
    }
}

fn reattach_kernel_driver(handle: &DeviceHandle<Context>, interface: u8) {
    if let Err(e) = handle.attach_kernel_driver(interface) {
        log::debug!("kernel driver reattach on interface {interface} failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_the_pad() {
        let target = UsbTarget::default();
        assert_eq!(target.vendor_id, 0x046d);
        assert_eq!(target.product_id, 0xc21f);
        assert_eq!(target.interface, 0);
        assert_eq!(target.endpoint, 0x81);
        assert_eq!(target.read_timeout, Duration::ZERO);
    }
}
