//! Core types for pagewin.
//!
//! This crate provides the data structures shared by the planner, the page
//! state and any host that renders them: window entries, pager
//! configuration and the error type.

mod config;
mod entry;
mod error;

pub use config::{DEFAULT_PAGE_SIZE, PagerConfig, PagerConfigBuilder};
pub use entry::WindowEntry;
pub use error::{PagerError, Result, non_negative};
