use std::time::Duration;

use padbridge_report::{decode, NoiseFilter, RawReport, REPORT_LEN};
use padbridge_uinput::EventSink;
use padbridge_usb::{Connector, ReportLink, Transfer};

use crate::app::emitter::Emitter;
use crate::shutdown::Shutdown;
use crate::{print_debug, print_info, print_warning};

/// Connection state, holding the open link once there is one.
enum State<L> {
    Searching,
    Connected(L),
    Streaming(L),
}

/// Observable part of [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Connected,
    Streaming,
}

/// Pumps reports from a pad into a sink, rediscovering the pad whenever the
/// connection is lost.
pub struct Bridge<C: Connector, S: EventSink> {
    connector: C,
    sink: S,
    emitter: Emitter,
    filter: NoiseFilter,
    retry_interval: Duration,
    shutdown: Shutdown,
    state: State<C::Link>,
    buf: RawReport,
}

impl<C: Connector, S: EventSink> Bridge<C, S> {
    pub fn new(
        connector: C,
        sink: S,
        filter: NoiseFilter,
        retry_interval: Duration,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            connector,
            sink,
            emitter: Emitter::new(),
            filter,
            retry_interval,
            shutdown,
            state: State::Searching,
            buf: [0; REPORT_LEN],
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Searching => Phase::Searching,
            State::Connected(_) => Phase::Connected,
            State::Streaming(_) => Phase::Streaming,
        }
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one state transition.
    pub fn step(&mut self) {
        self.state = match std::mem::replace(&mut self.state, State::Searching) {
            State::Searching => self.search(),
            State::Connected(link) => State::Streaming(link),
            State::Streaming(link) => self.stream(link),
        };
    }

    /// Step until a stop is requested, then release the pad.
    pub fn run(&mut self) {
        while !self.shutdown.requested() {
            self.step();
        }
        if !matches!(self.state, State::Searching) {
            print_debug!("Releasing device");
        }
        self.state = State::Searching;
    }

    /// Give the sink back, releasing the pad if it is still held.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn search(&mut self) -> State<C::Link> {
        match self.connector.connect() {
            Ok(Some(link)) => {
                print_info!("Connected to device, waiting for input.");
                return State::Connected(link);
            }
            Ok(None) => {
                print_info!("No device found. Retrying in {}", interval(self.retry_interval));
            }
            Err(err) => {
                print_warning!(
                    "Failed to open device: {err}. Retrying in {}",
                    interval(self.retry_interval)
                );
            }
        }
        self.shutdown.wait(self.retry_interval);
        State::Searching
    }

    fn stream(&mut self, mut link: C::Link) -> State<C::Link> {
        let transfer = link.read_report(&mut self.buf);
        // The read may have blocked for a long time.
        if self.shutdown.requested() {
            return State::Streaming(link);
        }
        match transfer {
            Transfer::Complete => {
                let report = self.filter.apply(&decode(&self.buf));
                if let Err(err) = self.emitter.emit(&report, &mut self.sink) {
                    print_warning!("Failed to write events: {err}");
                }
            }
            Transfer::Transient(err) => print_debug!("Transient read error: {err}"),
            Transfer::Malformed { len } => {
                print_warning!("Error receiving data: expected {REPORT_LEN} bytes, got {len}");
            }
            Transfer::Gone(err) => print_warning!("Error receiving data: {err}"),
        }
        if transfer.is_terminal() {
            self.disconnect(link)
        } else {
            State::Streaming(link)
        }
    }

    fn disconnect(&mut self, link: C::Link) -> State<C::Link> {
        drop(link);
        self.emitter.reset();
        print_info!("Connection terminated. Retrying in {}.", interval(self.retry_interval));
        self.shutdown.wait(self.retry_interval);
        State::Searching
    }
}

fn interval(duration: Duration) -> String {
    match (duration.as_secs(), duration.subsec_millis()) {
        (1, 0) => "1 second".to_string(),
        (secs, 0) => format!("{secs} seconds"),
        _ => format!("{} ms", duration.as_millis()),
    }
}
