//! Decoding of the gamepad's fixed 20-byte input report.

mod filter;
mod layout;
mod report;
mod types;

pub use crate::filter::{Deadzone, NoiseFilter, TRIGGER_DEADZONE};
pub use crate::layout::{
    Endian, Field, FieldSpec, Layout, RawReport, Transform, Width, PAD_LAYOUT, REPORT_LEN,
};
pub use crate::report::{decode, LogicalReport};
pub use crate::types::{
    Button, Buttons, Dpad, Horizontal, Vertical, PRIMARY_FLAGS, SECONDARY_FLAGS,
};
