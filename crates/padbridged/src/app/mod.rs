mod emitter;
mod lifecycle;

pub use emitter::{Emitter, EmitterState, EventBatch, MAX_EVENTS_PER_CYCLE, TRIGGER_AXIS};
pub use lifecycle::{Bridge, Phase};

use crate::config::Config;
use crate::error::Result;

/// Create the virtual gamepad and bridge the physical one into it until a
/// stop signal arrives.
#[cfg(target_os = "linux")]
pub fn run(config: &Config) -> Result<()> {
    use padbridge_uinput::VirtualDevice;
    use padbridge_usb::UsbConnector;

    use crate::shutdown::Shutdown;
    use crate::{print_debug, print_info};

    let shutdown = Shutdown::new();
    shutdown.install()?;

    let connector = UsbConnector::new(config.usb)?;
    let device = VirtualDevice::create(&config.device_spec())?;
    print_info!("Created virtual device \"{}\"", config.device_name);
    // Let udev and readers attach before the first event.
    shutdown.wait(config.settle_delay);

    let mut bridge = Bridge::new(
        connector,
        device,
        config.filter,
        config.retry_interval,
        shutdown,
    );
    bridge.run();
    let device = bridge.into_sink();

    print_info!("Shutting down");
    std::thread::sleep(config.teardown_delay);
    drop(device);
    print_debug!("Virtual device destroyed");
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn run(_config: &Config) -> Result<()> {
    Err(crate::error::Error::Unsupported)
}
