use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::capabilities::DeviceSpec;
use crate::error::{Error, Result};
use crate::event::{EventSink, InputEvent, EV_ABS, EV_KEY, EV_SYN};
use crate::ffi;

/// Default location of the uinput control node.
pub const UINPUT_PATH: &str = "/dev/uinput";

/// A uinput-backed virtual input device.
///
/// The kernel device node is destroyed when the value is dropped.
pub struct VirtualDevice {
    file: File,
}

impl VirtualDevice {
    /// Creates the device through [`UINPUT_PATH`].
    pub fn create(spec: &DeviceSpec) -> Result<Self> {
        Self::create_at(Path::new(UINPUT_PATH), spec)
    }

    pub fn create_at(path: &Path, spec: &DeviceSpec) -> Result<Self> {
        let name = spec.name.as_bytes();
        if name.len() >= ffi::UINPUT_MAX_NAME_SIZE {
            return Err(Error::NameTooLong(name.len()));
        }

        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let fd = file.as_raw_fd();

        register(fd, ffi::UI_SET_EVBIT, EV_SYN, "EV_SYN")?;
        register(fd, ffi::UI_SET_EVBIT, EV_KEY, "EV_KEY")?;
        for key in &spec.keys {
            register(fd, ffi::UI_SET_KEYBIT, *key as u16, &format!("{key:?}"))?;
        }

        register(fd, ffi::UI_SET_EVBIT, EV_ABS, "EV_ABS")?;
        for (axis, range) in &spec.axes {
            let what = format!("{axis:?}");
            register(fd, ffi::UI_SET_ABSBIT, *axis as u16, &what)?;
            let setup = ffi::UinputAbsSetup {
                code: *axis as u16,
                absinfo: libc::input_absinfo {
                    value: 0,
                    minimum: range.min,
                    maximum: range.max,
                    fuzz: 0,
                    flat: 0,
                    resolution: 0,
                },
            };
            ffi::ioctl_ptr(fd, ffi::UI_ABS_SETUP, &setup)
                .map_err(|source| Error::Capability { what, source })?;
        }

        let mut setup = ffi::UinputSetup {
            id: libc::input_id {
                bustype: ffi::BUS_USB,
                vendor: spec.vendor_id,
                product: spec.product_id,
                version: 0,
            },
            name: [0; ffi::UINPUT_MAX_NAME_SIZE],
            ff_effects_max: 0,
        };
        for (dst, src) in setup.name.iter_mut().zip(name) {
            *dst = *src as libc::c_char;
        }
        ffi::ioctl_ptr(fd, ffi::UI_DEV_SETUP, &setup).map_err(Error::Create)?;
        ffi::ioctl_none(fd, ffi::UI_DEV_CREATE).map_err(Error::Create)?;

        log::debug!("virtual device {:?} created", spec.name);
        Ok(Self { file })
    }
}

fn register(fd: RawFd, request: u32, code: u16, what: &str) -> Result<()> {
    ffi::ioctl_int(fd, request, libc::c_int::from(code)).map_err(|source| Error::Capability {
        what: what.to_string(),
        source,
    })
}

impl EventSink for VirtualDevice {
    fn emit(&mut self, event: InputEvent) -> Result<()> {
        let (kind, code, value) = event.raw_parts();
        self.file
            .write_all(&ffi::event_bytes(kind, code, value))
            .map_err(Error::Write)
    }
}

impl Drop for VirtualDevice {
    fn drop(&mut self) {
        if let Err(e) = ffi::ioctl_none(self.file.as_raw_fd(), ffi::UI_DEV_DESTROY) {
            log::warn!("failed to destroy virtual device: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::AbsRange;
    use crate::event::{AbsAxis, KeyCode};

    fn spec(name: &str) -> DeviceSpec {
        DeviceSpec {
            name: name.to_string(),
            vendor_id: 0x046d,
            product_id: 0xc21f,
            keys: vec![KeyCode::BtnStart],
            axes: vec![(AbsAxis::Hat0X, AbsRange::new(-1, 1))],
        }
    }

    #[test]
    fn rejects_oversized_name() {
        let name = "x".repeat(80);
        let err = VirtualDevice::create_at(Path::new("/nonexistent/uinput"), &spec(&name))
            .err()
            .unwrap();
        assert!(matches!(err, Error::NameTooLong(80)));
    }

    #[test]
    fn missing_control_node_is_an_open_error() {
        let err = VirtualDevice::create_at(Path::new("/nonexistent/uinput"), &spec("pad"))
            .err()
            .unwrap();
        match err {
            Error::Open { path, .. } => assert_eq!(path, Path::new("/nonexistent/uinput")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
