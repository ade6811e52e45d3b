pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{pad_right, separator};
pub use time::{format_duration, format_timestamp};
