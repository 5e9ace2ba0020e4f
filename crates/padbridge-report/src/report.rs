use crate::layout::{Field, RawReport, PAD_LAYOUT};
use crate::types::{Buttons, Dpad, PRIMARY_FLAGS, SECONDARY_FLAGS};

/// Decoded snapshot of the pad.
///
/// Left-stick X is part of the wire layout but is not carried here: its
/// output axis slot is reused for [`trigger_differential`](Self::trigger_differential).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalReport {
    /// Raw primary flag byte, unassigned bits included.
    pub primary_flags: u8,
    /// Raw secondary flag byte, unassigned bits included.
    pub secondary_flags: u8,
    pub buttons: Buttons,
    pub dpad: Dpad,
    pub left_stick_y: i32,
    pub right_stick_x: i32,
    pub right_stick_y: i32,
    /// Scaled to [0, 32767].
    pub left_trigger: i32,
    /// Scaled to [0, 32767].
    pub right_trigger: i32,
    /// `right_trigger - left_trigger`, unfiltered until passed through
    /// [`NoiseFilter`](crate::NoiseFilter).
    pub trigger_differential: i32,
}

impl LogicalReport {
    /// Report of a pad at rest: nothing held, sticks centered, triggers released.
    pub const fn neutral() -> Self {
        Self {
            primary_flags: 0,
            secondary_flags: 0,
            buttons: Buttons::empty(),
            dpad: Dpad {
                vertical: crate::Vertical::Neutral,
                horizontal: crate::Horizontal::Neutral,
            },
            left_stick_y: 0,
            right_stick_x: 0,
            right_stick_y: 0,
            left_trigger: 0,
            right_trigger: 0,
            trigger_differential: 0,
        }
    }
}

/// Decode a raw report. Every byte pattern is valid input.
pub fn decode(raw: &RawReport) -> LogicalReport {
    let buttons = Buttons::from_wire(raw);
    let left_trigger = PAD_LAYOUT.read(Field::LeftTrigger, raw);
    let right_trigger = PAD_LAYOUT.read(Field::RightTrigger, raw);
    LogicalReport {
        primary_flags: raw[PRIMARY_FLAGS],
        secondary_flags: raw[SECONDARY_FLAGS],
        buttons,
        dpad: Dpad::resolve(&buttons),
        left_stick_y: PAD_LAYOUT.read(Field::LeftStickY, raw),
        right_stick_x: PAD_LAYOUT.read(Field::RightStickX, raw),
        right_stick_y: PAD_LAYOUT.read(Field::RightStickY, raw),
        left_trigger,
        right_trigger,
        trigger_differential: right_trigger - left_trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::REPORT_LEN;
    use crate::{Button, Horizontal, Vertical};

    fn centered() -> RawReport {
        let mut raw = [0u8; REPORT_LEN];
        for offset in [6, 8, 10, 12] {
            raw[offset] = 0x80;
        }
        raw
    }

    #[test]
    fn centered_report_is_neutral() {
        assert_eq!(decode(&centered()), LogicalReport::neutral());
        assert_eq!(LogicalReport::default(), LogicalReport::neutral());
    }

    #[test]
    fn decoding_is_deterministic() {
        let mut raw = centered();
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = byte.wrapping_add((i as u8).wrapping_mul(37));
        }
        assert_eq!(decode(&raw), decode(&raw));
    }

    #[test]
    fn start_pressed() {
        let mut raw = centered();
        raw[2] = 0x10;
        let report = decode(&raw);
        assert!(report.buttons.contains(Button::Start));
        assert_eq!(report.buttons.count(), 1);
        assert_eq!(report.primary_flags, 0x10);
        assert_eq!(report.dpad.vertical, Vertical::Neutral);
        assert_eq!(report.dpad.horizontal, Horizontal::Neutral);
    }

    #[test]
    fn dpad_priority_in_decoded_report() {
        let mut raw = centered();
        raw[2] = 0x03;
        assert_eq!(decode(&raw).dpad.vertical, Vertical::Down);
        raw[2] = 0x01;
        assert_eq!(decode(&raw).dpad.vertical, Vertical::Up);
        raw[2] = 0x00;
        assert_eq!(decode(&raw).dpad.vertical, Vertical::Neutral);
    }

    #[test]
    fn left_stick_x_is_not_decoded() {
        let mut raw = centered();
        raw[6] = 0xff;
        raw[7] = 0xff;
        assert_eq!(decode(&raw), LogicalReport::neutral());
    }

    #[test]
    fn axes_and_triggers() {
        let mut raw = centered();
        raw[4] = 100;
        raw[5] = 103;
        raw[8] = 0x00;
        raw[10] = 0xff;
        raw[11] = 0xff;
        raw[12] = 0x7f;
        raw[13] = 0xff;
        let report = decode(&raw);
        assert_eq!(report.left_trigger, 12849);
        assert_eq!(report.right_trigger, 13235);
        assert_eq!(report.trigger_differential, 386);
        assert_eq!(report.left_stick_y, -32768);
        assert_eq!(report.right_stick_x, 32767);
        assert_eq!(report.right_stick_y, -1);
    }

    #[test]
    fn unassigned_flag_bits_survive_in_raw_bytes() {
        let mut raw = centered();
        raw[3] = 0x04;
        let report = decode(&raw);
        assert!(report.buttons.is_empty());
        assert_eq!(report.secondary_flags, 0x04);
    }
}
