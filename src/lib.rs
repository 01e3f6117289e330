//! callerboard: a terminal client for the recent-callers feed of the
//! vanity-number service.
//!
//! - **callers**: wire and store shapes of caller records, plus reshaping
//! - **store**: state, mutations, and actions (the only write path)
//! - **api**: the recent-callers source trait and its HTTP client
//! - **ui**: ratatui view over the store
//! - **list**: one-shot fetch-and-print command

pub mod api;
pub mod callers;
pub mod cli;
pub mod config;
pub mod list;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
