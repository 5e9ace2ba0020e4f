use crate::report::LogicalReport;

/// Trigger differential magnitudes up to this value are treated as rest.
///
/// The two triggers never settle on identical readings, so the raw
/// differential wobbles by a couple of units while both are released.
pub const TRIGGER_DEADZONE: i32 = 6;

/// Symmetric deadzone around zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadzone(pub i32);

impl Deadzone {
    /// A deadzone that lets every value through.
    pub const NONE: Self = Self(0);

    #[inline]
    pub fn apply(&self, value: i32) -> i32 {
        if value.abs() <= self.0 {
            0
        } else {
            value
        }
    }
}

/// Noise policy applied to a decoded report before it is diffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseFilter {
    pub trigger: Deadzone,
    /// Applied to the three emitted stick axes. Disabled by default.
    pub stick: Deadzone,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            trigger: Deadzone(TRIGGER_DEADZONE),
            stick: Deadzone::NONE,
        }
    }
}

impl NoiseFilter {
    /// Differential of two scaled trigger values with the deadzone applied.
    #[inline]
    pub fn trigger_differential(&self, left: i32, right: i32) -> i32 {
        self.trigger.apply(right - left)
    }

    pub fn apply(&self, report: &LogicalReport) -> LogicalReport {
        LogicalReport {
            left_stick_y: self.stick.apply(report.left_stick_y),
            right_stick_x: self.stick.apply(report.right_stick_x),
            right_stick_y: self.stick.apply(report.right_stick_y),
            trigger_differential: self
                .trigger_differential(report.left_trigger, report.right_trigger),
            ..*report
        }
    }
}
