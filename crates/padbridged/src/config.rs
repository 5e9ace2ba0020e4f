use std::time::Duration;

use padbridge_report::NoiseFilter;
use padbridge_uinput::{AbsAxis, AbsRange, DeviceSpec, KeyCode};
use padbridge_usb::UsbTarget;

use crate::error::{Error, Result};

/// Name the virtual device registers under.
pub const DEVICE_NAME: &str = "Input handler";

const VERBOSE_VAR: &str = "PADBRIDGE_VERBOSE";
const NO_COLOR_VAR: &str = "NO_COLOR";
const READ_TIMEOUT_VAR: &str = "PADBRIDGE_READ_TIMEOUT_MS";

const STICK_RANGE: AbsRange = AbsRange::new(-32768, 32767);
const TRIGGER_RANGE: AbsRange = AbsRange::new(0, 255);
const HAT_RANGE: AbsRange = AbsRange::new(-1, 1);

/// Daemon settings.
///
/// The device identity and timings are fixed; only logging and the read
/// timeout can be changed through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub usb: UsbTarget,
    pub device_name: String,
    pub filter: NoiseFilter,
    /// Pause between discovery attempts and after a lost connection.
    pub retry_interval: Duration,
    /// Pause after creating the virtual device so userspace can pick it up.
    pub settle_delay: Duration,
    /// Pause before destroying the virtual device so readers can drain it.
    pub teardown_delay: Duration,
    pub verbose: bool,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            usb: UsbTarget::default(),
            device_name: DEVICE_NAME.to_string(),
            filter: NoiseFilter::default(),
            retry_interval: Duration::from_secs(1),
            settle_delay: Duration::from_secs(1),
            teardown_delay: Duration::from_secs(1),
            verbose: false,
            no_color: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        config.verbose = lookup(VERBOSE_VAR).is_some_and(|value| is_truthy(&value));
        // https://no-color.org: any non-empty value disables color.
        config.no_color = lookup(NO_COLOR_VAR).is_some_and(|value| !value.is_empty());
        if let Some(value) = lookup(READ_TIMEOUT_VAR) {
            let millis = value.trim().parse::<u64>().map_err(|_| Error::Config {
                name: READ_TIMEOUT_VAR,
                value: value.clone(),
            })?;
            config.usb.read_timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }

    /// Capabilities of the virtual gamepad.
    ///
    /// The device advertises the identifiers of the physical pad.
    pub fn device_spec(&self) -> DeviceSpec {
        DeviceSpec {
            name: self.device_name.clone(),
            vendor_id: self.usb.vendor_id,
            product_id: self.usb.product_id,
            keys: vec![
                KeyCode::BtnTl,
                KeyCode::BtnTr,
                KeyCode::BtnSelect,
                KeyCode::BtnStart,
                KeyCode::BtnMode,
                KeyCode::BtnThumbl,
                KeyCode::BtnThumbr,
                KeyCode::BtnSouth,
                KeyCode::BtnEast,
                KeyCode::BtnNorth,
                KeyCode::BtnWest,
            ],
            axes: vec![
                (AbsAxis::X, STICK_RANGE),
                (AbsAxis::Y, STICK_RANGE),
                (AbsAxis::Rx, STICK_RANGE),
                (AbsAxis::Ry, STICK_RANGE),
                (AbsAxis::Z, TRIGGER_RANGE),
                (AbsAxis::Rz, TRIGGER_RANGE),
                (AbsAxis::Hat0X, HAT_RANGE),
                (AbsAxis::Hat0Y, HAT_RANGE),
            ],
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
