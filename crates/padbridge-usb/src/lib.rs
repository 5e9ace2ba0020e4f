//! Discovery of the physical pad and classification of report transfers.

mod error;
mod link;
mod transfer;
mod usb;

pub use crate::error::{Error, Result};
pub use crate::link::{Connector, ReportLink};
pub use crate::transfer::Transfer;
pub use crate::usb::{
    UsbConnector, UsbLink, UsbTarget, PAD_PRODUCT_ID, PAD_VENDOR_ID, REPORT_ENDPOINT,
    REPORT_INTERFACE,
};

pub use rusb::Error as UsbError;
