use crate::error::Result;

pub(crate) const EV_SYN: u16 = 0x00;
pub(crate) const EV_KEY: u16 = 0x01;
pub(crate) const EV_ABS: u16 = 0x03;
pub(crate) const SYN_REPORT: u16 = 0x00;

/// Gamepad key codes from `linux/input-event-codes.h`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    BtnSouth = 0x130,
    BtnEast = 0x131,
    BtnNorth = 0x133,
    BtnWest = 0x134,
    BtnTl = 0x136,
    BtnTr = 0x137,
    BtnSelect = 0x13a,
    BtnStart = 0x13b,
    BtnMode = 0x13c,
    BtnThumbl = 0x13d,
    BtnThumbr = 0x13e,
}

/// Absolute axis codes from `linux/input-event-codes.h`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsAxis {
    X = 0x00,
    Y = 0x01,
    Z = 0x02,
    Rx = 0x03,
    Ry = 0x04,
    Rz = 0x05,
    Hat0X = 0x10,
    Hat0Y = 0x11,
}

/// A single event written to the virtual device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { code: KeyCode, pressed: bool },
    Abs { axis: AbsAxis, value: i32 },
    /// Marks the end of one state snapshot.
    Sync,
}

impl InputEvent {
    pub fn key(code: KeyCode, pressed: bool) -> Self {
        Self::Key { code, pressed }
    }

    pub fn abs(axis: AbsAxis, value: i32) -> Self {
        Self::Abs { axis, value }
    }

    /// Kernel `(type, code, value)` triple of the event.
    pub fn raw_parts(&self) -> (u16, u16, i32) {
        match *self {
            Self::Key { code, pressed } => (EV_KEY, code as u16, i32::from(pressed)),
            Self::Abs { axis, value } => (EV_ABS, axis as u16, value),
            Self::Sync => (EV_SYN, SYN_REPORT, 0),
        }
    }
}

/// Consumer of emitted input events.
pub trait EventSink {
    fn emit(&mut self, event: InputEvent) -> Result<()>;
}

/// Collects events in memory.
impl EventSink for Vec<InputEvent> {
    fn emit(&mut self, event: InputEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}
