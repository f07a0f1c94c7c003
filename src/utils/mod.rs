pub mod sanitize;
pub mod time;

pub use sanitize::sanitize_input;
pub use time::{minutes_between, parse_time};
