//! Caller records: the wire shape served by the recent-callers endpoint and
//! the normalized shape held in the store.

mod normalize;
mod raw;
mod record;

pub use normalize::{format_calendar_date, normalize, parse_date, NormalizeError};
pub use raw::{RawCaller, RecentResponse};
pub use record::RecentCaller;
