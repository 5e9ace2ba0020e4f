use padbridge_bit_derive::Bit;
use padbridge_bit_mask::Bitmask;

/// Byte holding the dpad directions, Start, Back and the stick clicks.
pub const PRIMARY_FLAGS: usize = 2;
/// Byte holding the shoulders and the face buttons.
pub const SECONDARY_FLAGS: usize = 3;

/// Every flag the pad reports in its two bitmask bytes.
///
/// The dpad directions are kept here as raw flags; [`Dpad`] is the
/// resolved view of them.
#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    #[wire(offset = 2, mask = 0x01)]
    DPadUp,
    #[wire(offset = 2, mask = 0x02)]
    DPadDown,
    #[wire(offset = 2, mask = 0x04)]
    DPadLeft,
    #[wire(offset = 2, mask = 0x08)]
    DPadRight,
    #[wire(offset = 2, mask = 0x10)]
    Start,
    #[wire(offset = 2, mask = 0x20)]
    Back,
    #[wire(offset = 2, mask = 0x40)]
    LeftStick,
    #[wire(offset = 2, mask = 0x80)]
    RightStick,
    #[wire(offset = 3, mask = 0x01)]
    LeftShoulder,
    #[wire(offset = 3, mask = 0x02)]
    RightShoulder,
    #[wire(offset = 3, mask = 0x10)]
    A,
    #[wire(offset = 3, mask = 0x20)]
    B,
    #[wire(offset = 3, mask = 0x40)]
    X,
    #[wire(offset = 3, mask = 0x80)]
    Y,
}

/// Set of held flags.
pub type Buttons = Bitmask<Button>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Vertical {
    #[default]
    Neutral,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Horizontal {
    #[default]
    Neutral,
    Left,
    Right,
}

/// Dpad with opposite directions resolved to a single value per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dpad {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Dpad {
    /// Resolve raw direction flags.
    ///
    /// Down wins over Up and Left wins over Right.
    pub fn resolve(buttons: &Buttons) -> Self {
        let vertical = if buttons.contains(Button::DPadDown) {
            Vertical::Down
        } else if buttons.contains(Button::DPadUp) {
            Vertical::Up
        } else {
            Vertical::Neutral
        };
        let horizontal = if buttons.contains(Button::DPadLeft) {
            Horizontal::Left
        } else if buttons.contains(Button::DPadRight) {
            Horizontal::Right
        } else {
            Horizontal::Neutral
        };
        Self { vertical, horizontal }
    }

    /// Hat value in [-1, 1], positive pointing down.
    pub fn hat_y(&self) -> i32 {
        match self.vertical {
            Vertical::Neutral => 0,
            Vertical::Up => -1,
            Vertical::Down => 1,
        }
    }

    /// Hat value in [-1, 1], positive pointing right.
    pub fn hat_x(&self) -> i32 {
        match self.horizontal {
            Horizontal::Neutral => 0,
            Horizontal::Left => -1,
            Horizontal::Right => 1,
        }
    }
}
