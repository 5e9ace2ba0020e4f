// Colorized wrappers for logging

use fern::Dispatch;

#[doc(hidden)]
pub use colored::Colorize;

#[inline(always)]
pub fn format_log(message: &str) -> String {
    let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S").to_string();
    format!("[{now}] {message}")
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use $crate::logging::Colorize as _;
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::error!("{}", message.bright_red());
    }}
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {{
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::info!("{message}");
    }}
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {{
        use $crate::logging::Colorize as _;
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::debug!("{}", message.dimmed());
    }}
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {{
        use $crate::logging::Colorize as _;
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::warn!("{}", message.bright_yellow());
    }}
}

/// Setup the logger.
pub fn setup(verbose: bool, no_color: bool) -> Result<(), log::SetLoggerError> {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    Dispatch::new()
        .level(log::LevelFilter::Error) // Hide dependency logs
        .level_for("padbridged", log_level)
        .level_for("padbridge_usb", log_level)
        .level_for("padbridge_uinput", log_level)
        .chain(std::io::stdout())
        .apply()?;

    if no_color {
        colored::control::set_override(false);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::format_log;

    #[test]
    fn format_log_prefixes_timestamp() {
        let line = format_log("Connected to device");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] Connected to device"));
        // "[YYYY.MM.DD HH:MM:SS] "
        assert_eq!(line.find(']'), Some(20));
    }
}
