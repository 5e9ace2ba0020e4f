use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for virtual device operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The uinput control node could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// A capability could not be registered with the kernel.
    #[error("Failed to register {what}: {source}")]
    Capability { what: String, source: io::Error },
    /// The device name does not fit the kernel's name buffer.
    #[error("Device name is too long: {0} bytes")]
    NameTooLong(usize),
    /// Device setup or creation was rejected.
    #[error("Failed to create virtual device: {0}")]
    Create(io::Error),
    /// An event could not be written to the device.
    #[error("Failed to write event: {0}")]
    Write(io::Error),
}

/// Convenient result alias for virtual device operations.
pub type Result<T> = std::result::Result<T, Error>;
