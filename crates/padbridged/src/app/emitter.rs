use padbridge_report::{Button, LogicalReport};
use padbridge_uinput::{AbsAxis, EventSink, InputEvent, KeyCode};
use smallvec::SmallVec;

/// Upper bound of events produced by one cycle, marker included.
pub const MAX_EVENTS_PER_CYCLE: usize = 17;

pub type EventBatch = SmallVec<[InputEvent; MAX_EVENTS_PER_CYCLE]>;

/// Keys re-sent whenever the primary flag byte changes.
const PRIMARY_KEYS: [(Button, KeyCode); 4] = [
    (Button::Start, KeyCode::BtnStart),
    (Button::Back, KeyCode::BtnSelect),
    (Button::LeftStick, KeyCode::BtnThumbl),
    (Button::RightStick, KeyCode::BtnThumbr),
];

/// Keys re-sent whenever the secondary flag byte changes.
const SECONDARY_KEYS: [(Button, KeyCode); 6] = [
    (Button::LeftShoulder, KeyCode::BtnTl),
    (Button::RightShoulder, KeyCode::BtnTr),
    (Button::A, KeyCode::BtnSouth),
    (Button::B, KeyCode::BtnEast),
    (Button::X, KeyCode::BtnNorth),
    (Button::Y, KeyCode::BtnWest),
];

/// Output axis carrying the trigger differential.
///
/// Left-stick X is never emitted, so its slot is reused for the triggers.
pub const TRIGGER_AXIS: AbsAxis = AbsAxis::X;

/// What was last sent to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterState {
    pub primary_flags: u8,
    pub secondary_flags: u8,
    pub left_stick_y: i32,
    pub right_stick_x: i32,
    pub right_stick_y: i32,
    pub left_trigger: i32,
    pub right_trigger: i32,
}

impl EmitterState {
    /// Forget everything that was sent, as if the pad had been at rest.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    fn latch(&mut self, report: &LogicalReport) {
        *self = Self {
            primary_flags: report.primary_flags,
            secondary_flags: report.secondary_flags,
            left_stick_y: report.left_stick_y,
            right_stick_x: report.right_stick_x,
            right_stick_y: report.right_stick_y,
            left_trigger: report.left_trigger,
            right_trigger: report.right_trigger,
        };
    }
}

/// Turns filtered reports into the events that changed since the last one.
#[derive(Debug, Default)]
pub struct Emitter {
    state: EmitterState,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EmitterState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Events describing how `report` differs from the latched state.
    ///
    /// Flag events come first, then axes, then the sync marker, which is
    /// always present.
    pub fn diff(&self, report: &LogicalReport) -> EventBatch {
        let prev = &self.state;
        let mut events = EventBatch::new();

        if report.primary_flags != prev.primary_flags {
            events.push(InputEvent::abs(AbsAxis::Hat0Y, report.dpad.hat_y()));
            events.push(InputEvent::abs(AbsAxis::Hat0X, report.dpad.hat_x()));
            push_keys(&mut events, &PRIMARY_KEYS, report);
        }
        if report.secondary_flags != prev.secondary_flags {
            push_keys(&mut events, &SECONDARY_KEYS, report);
        }

        if report.left_stick_y != prev.left_stick_y {
            events.push(InputEvent::abs(AbsAxis::Y, report.left_stick_y));
        }
        if report.right_stick_x != prev.right_stick_x {
            events.push(InputEvent::abs(AbsAxis::Rx, report.right_stick_x));
        }
        if report.right_stick_y != prev.right_stick_y {
            events.push(InputEvent::abs(AbsAxis::Ry, report.right_stick_y));
        }
        if report.left_trigger != prev.left_trigger || report.right_trigger != prev.right_trigger {
            events.push(InputEvent::abs(TRIGGER_AXIS, report.trigger_differential));
        }

        events.push(InputEvent::Sync);
        events
    }

    /// Send the delta for `report` to `sink` and latch it.
    ///
    /// If the sink fails midway the state is left as it was, so the next
    /// cycle sends the whole delta again.
    pub fn emit<S: EventSink>(
        &mut self,
        report: &LogicalReport,
        sink: &mut S,
    ) -> padbridge_uinput::Result<usize> {
        let events = self.diff(report);
        for event in &events {
            sink.emit(*event)?;
        }
        self.state.latch(report);
        Ok(events.len())
    }
}

fn push_keys(events: &mut EventBatch, keys: &[(Button, KeyCode)], report: &LogicalReport) {
    for (button, code) in keys {
        events.push(InputEvent::key(*code, report.buttons.contains(*button)));
    }
}
