//! Byte layout of the pad's input report.
//!
//! The report has no header, checksum or version byte, so the layout is kept
//! as data: each analog field is described by a [`FieldSpec`] and read by the
//! single [`FieldSpec::read`] routine. Button flags are declared on
//! [`Button`](crate::Button) itself.

/// Size of a single input report in bytes.
pub const REPORT_LEN: usize = 20;

/// One polling cycle worth of raw bytes.
pub type RawReport = [u8; REPORT_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U8,
    U16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Conversion from the unsigned wire value to the logical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Subtract a fixed bias, centering an unsigned axis on zero.
    Bias(i32),
    /// Linear scale from `[0, from]` to `[0, to]` with integer division.
    Scale { from: i32, to: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub offset: usize,
    pub width: Width,
    pub endian: Endian,
    pub transform: Transform,
}

impl FieldSpec {
    pub const fn stick(offset: usize) -> Self {
        Self {
            offset,
            width: Width::U16,
            endian: Endian::Big,
            transform: Transform::Bias(32768),
        }
    }

    pub const fn trigger(offset: usize) -> Self {
        Self {
            offset,
            width: Width::U8,
            endian: Endian::Big,
            transform: Transform::Scale {
                from: 255,
                to: 32767,
            },
        }
    }

    /// Read and transform the field from `raw`.
    pub fn read(&self, raw: &RawReport) -> i32 {
        let value = match self.width {
            Width::U8 => i32::from(raw[self.offset]),
            Width::U16 => {
                let bytes = [raw[self.offset], raw[self.offset + 1]];
                let value = match self.endian {
                    Endian::Big => u16::from_be_bytes(bytes),
                    Endian::Little => u16::from_le_bytes(bytes),
                };
                i32::from(value)
            }
        };
        match self.transform {
            Transform::Bias(bias) => value - bias,
            Transform::Scale { from, to } => value * to / from,
        }
    }
}

/// Analog fields of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LeftTrigger,
    RightTrigger,
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
}

/// Full description of a report: its length and where every field lives.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub len: usize,
    pub fields: &'static [(Field, FieldSpec)],
}

impl Layout {
    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, spec)| spec)
    }

    /// Read a field, returning 0 for fields the layout does not carry.
    pub fn read(&self, field: Field, raw: &RawReport) -> i32 {
        self.spec(field).map_or(0, |spec| spec.read(raw))
    }
}

/// Layout of the gamepad this bridge is built for.
pub const PAD_LAYOUT: Layout = Layout {
    len: REPORT_LEN,
    fields: &[
        (Field::LeftTrigger, FieldSpec::trigger(4)),
        (Field::RightTrigger, FieldSpec::trigger(5)),
        (Field::LeftStickX, FieldSpec::stick(6)),
        (Field::LeftStickY, FieldSpec::stick(8)),
        (Field::RightStickX, FieldSpec::stick(10)),
        (Field::RightStickY, FieldSpec::stick(12)),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(offset: usize, bytes: &[u8]) -> RawReport {
        let mut raw = [0u8; REPORT_LEN];
        raw[offset..offset + bytes.len()].copy_from_slice(bytes);
        raw
    }

    #[test]
    fn stick_is_big_endian_and_centered() {
        let spec = FieldSpec::stick(8);
        assert_eq!(spec.read(&report_with(8, &[0x80, 0x00])), 0);
        assert_eq!(spec.read(&report_with(8, &[0x00, 0x00])), -32768);
        assert_eq!(spec.read(&report_with(8, &[0xff, 0xff])), 32767);
        assert_eq!(spec.read(&report_with(8, &[0x80, 0x01])), 1);
        assert_eq!(spec.read(&report_with(8, &[0x01, 0x80])), 384 - 32768);
    }

    #[test]
    fn little_endian_field() {
        let spec = FieldSpec {
            endian: Endian::Little,
            ..FieldSpec::stick(10)
        };
        assert_eq!(spec.read(&report_with(10, &[0x00, 0x80])), 0);
        assert_eq!(spec.read(&report_with(10, &[0x01, 0x80])), 1);
    }

    #[test]
    fn trigger_scales_to_full_range() {
        let spec = FieldSpec::trigger(4);
        assert_eq!(spec.read(&report_with(4, &[0])), 0);
        assert_eq!(spec.read(&report_with(4, &[255])), 32767);
        assert_eq!(spec.read(&report_with(4, &[100])), 12849);
        assert_eq!(spec.read(&report_with(4, &[1])), 128);
    }

    #[test]
    fn pad_layout_fields_fit_the_report() {
        for (field, spec) in PAD_LAYOUT.fields {
            let width = match spec.width {
                Width::U8 => 1,
                Width::U16 => 2,
            };
            assert!(spec.offset + width <= PAD_LAYOUT.len, "{field:?} overflows");
        }
    }

    #[test]
    fn layout_reads_by_field() {
        let raw = report_with(10, &[0x90, 0x00]);
        assert_eq!(PAD_LAYOUT.read(Field::RightStickX, &raw), 0x1000);
        assert!(PAD_LAYOUT.spec(Field::LeftStickX).is_some());

        let empty = Layout {
            len: REPORT_LEN,
            fields: &[],
        };
        assert_eq!(empty.read(Field::RightStickX, &raw), 0);
    }
}
