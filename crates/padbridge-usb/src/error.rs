use thiserror::Error;

/// Error type for USB discovery and setup.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize libusb.
    #[error("USB context init failed: {0}")]
    Context(rusb::Error),
    /// Failed to list attached devices.
    #[error("Device enumeration failed: {0}")]
    Enumerate(rusb::Error),
    /// The pad was found but could not be opened.
    #[error("Failed to open device: {0}")]
    Open(rusb::Error),
    /// The kernel driver could not be detached from the interface.
    #[error("Failed to detach kernel driver from interface {interface}: {source}")]
    Detach { interface: u8, source: rusb::Error },
    /// The interface could not be claimed.
    #[error("Failed to claim interface {interface}: {source}")]
    Claim { interface: u8, source: rusb::Error },
}

/// Convenient result alias for USB operations.
pub type Result<T> = std::result::Result<T, Error>;
