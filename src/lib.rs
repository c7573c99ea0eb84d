//! trackr - JSON-file record stores for small desktop utilities
//!
//! trackr provides the shared record-store core behind a to-do list manager
//! and a personal expense tracker: an in-memory ordered sequence of records,
//! filter and aggregation queries over it, and synchronous persistence to a
//! single JSON file after every mutation. The presentation layer (GUI, TUI,
//! or anything else) lives outside this crate and talks to the stores.

pub mod domain;
pub mod error;
pub mod logging;
pub mod paths;
pub mod store;

pub use error::{Result, StoreError};
