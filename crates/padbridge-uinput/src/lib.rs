//! Virtual input device sink backed by Linux uinput.

mod capabilities;
mod error;
mod event;

#[cfg(target_os = "linux")]
mod device;
#[cfg(target_os = "linux")]
mod ffi;

pub use crate::capabilities::{AbsRange, DeviceSpec};
pub use crate::error::{Error, Result};
pub use crate::event::{AbsAxis, EventSink, InputEvent, KeyCode};

#[cfg(target_os = "linux")]
pub use crate::device::{VirtualDevice, UINPUT_PATH};
