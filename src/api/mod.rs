//! Access to the recent-callers endpoint.
//!
//! Actions depend on the [`RecentCallersSource`] trait only; [`CallerApi`]
//! is the HTTP implementation used by the binary.

mod client;
mod error;
mod source;

pub use client::CallerApi;
pub use error::SyncError;
pub use source::RecentCallersSource;
