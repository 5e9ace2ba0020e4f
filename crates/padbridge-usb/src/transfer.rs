/// Outcome of one report read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Exactly one full report was received.
    Complete,
    /// Timeout or low-level I/O hiccup. The link stays usable.
    Transient(rusb::Error),
    /// The device sent a report of the wrong size.
    Malformed { len: usize },
    /// Any other failure. The link must be discarded.
    Gone(rusb::Error),
}

impl Transfer {
    /// Classify the result of a read that expected `expected` bytes.
    pub fn classify(result: Result<usize, rusb::Error>, expected: usize) -> Self {
        match result {
            Ok(len) if len == expected => Self::Complete,
            Ok(len) => Self::Malformed { len },
            Err(err @ (rusb::Error::Timeout | rusb::Error::Io)) => Self::Transient(err),
            Err(err) => Self::Gone(err),
        }
    }

    /// Whether the link has to be torn down after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Gone(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_report_completes() {
        assert_eq!(Transfer::classify(Ok(20), 20), Transfer::Complete);
        assert!(!Transfer::Complete.is_terminal());
    }

    #[test]
    fn wrong_length_is_malformed() {
        assert_eq!(Transfer::classify(Ok(0), 20), Transfer::Malformed { len: 0 });
        assert_eq!(Transfer::classify(Ok(19), 20), Transfer::Malformed { len: 19 });
        assert_eq!(Transfer::classify(Ok(32), 20), Transfer::Malformed { len: 32 });
        assert!(Transfer::Malformed { len: 19 }.is_terminal());
    }

    #[test]
    fn timeout_and_io_are_transient() {
        for err in [rusb::Error::Timeout, rusb::Error::Io] {
            let outcome = Transfer::classify(Err(err), 20);
            assert_eq!(outcome, Transfer::Transient(err));
            assert!(!outcome.is_terminal());
        }
    }

    #[test]
    fn other_errors_mean_the_device_is_gone() {
        for err in [
            rusb::Error::NoDevice,
            rusb::Error::Pipe,
            rusb::Error::Overflow,
            rusb::Error::Interrupted,
            rusb::Error::Other,
        ] {
            let outcome = Transfer::classify(Err(err), 20);
            assert_eq!(outcome, Transfer::Gone(err));
            assert!(outcome.is_terminal());
        }
    }
}
