use crate::event::{AbsAxis, KeyCode};

/// Inclusive value range of an absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsRange {
    pub min: i32,
    pub max: i32,
}

impl AbsRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Identity and capabilities of a virtual device, registered once at creation.
#[derive(Debug, Clone)]
pub struct DeviceSpec {
    pub name: String,
    pub vendor_id: u16,
    pub product_id: u16,
    pub keys: Vec<KeyCode>,
    pub axes: Vec<(AbsAxis, AbsRange)>,
}
