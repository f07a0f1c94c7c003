pub mod context;
pub mod day_summary;
pub mod entry;
pub mod location;

pub use context::RequestContext;
pub use day_summary::HoursSummary;
pub use entry::{SequencedLocation, TimeEntry};
pub use location::Location;
