use thiserror::Error;

/// Fatal errors of the bridge daemon.
///
/// Everything that happens after setup is recovered inside the connection
/// loop, so these only surface while starting up.
#[derive(Debug, Error)]
pub enum Error {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    Config { name: &'static str, value: String },
    /// The USB backend could not be initialized.
    #[error(transparent)]
    Usb(#[from] padbridge_usb::Error),
    /// The virtual device could not be set up.
    #[error(transparent)]
    Device(#[from] padbridge_uinput::Error),
    /// The stop signal handler could not be installed.
    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
    /// The SIGQUIT handler could not be installed.
    #[error("Failed to install SIGQUIT handler: {0}")]
    QuitSignal(std::io::Error),
    /// The daemon only runs where uinput exists.
    #[error("Virtual input devices are only supported on Linux")]
    Unsupported,
}

/// Convenient result alias for daemon operations.
pub type Result<T> = std::result::Result<T, Error>;
