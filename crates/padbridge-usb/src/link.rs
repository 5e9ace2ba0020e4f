use crate::error::Result;
use crate::transfer::Transfer;

/// An open connection to the pad that yields raw reports.
///
/// Dropping the link releases the device.
pub trait ReportLink {
    /// Block until the next report fills `buf`, or the read fails.
    fn read_report(&mut self, buf: &mut [u8]) -> Transfer;
}

/// Locates and opens the pad.
pub trait Connector {
    type Link: ReportLink;

    /// Returns `Ok(None)` when no matching device is attached.
    fn connect(&mut self) -> Result<Option<Self::Link>>;
}
