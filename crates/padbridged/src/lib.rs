pub mod app;
pub mod config;
pub mod logging;
pub mod shutdown;

mod error;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::shutdown::Shutdown;
