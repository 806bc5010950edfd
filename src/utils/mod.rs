//! Utility functions

pub mod time;
pub mod validation;

pub use time::{format_timestamp, now_utc, parse_datetime};
pub use validation::{empty_as_none, parse_record_id, validate_email_format, RequiredFields};
