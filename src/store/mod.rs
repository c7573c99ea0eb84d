//! Record stores with flat JSON-file persistence.
//!
//! Each store owns an ordered in-memory sequence of records backed by one
//! JSON file: the file is read once when the store opens, and rewritten in
//! full after every mutation. `RecordStore` is the generic sequence + file
//! pairing; `TaskStore` and `ExpenseStore` layer the type-specific
//! validation, edit semantics, and queries on top.
//!
//! # Example
//!
//! ```ignore
//! use trackr::store::{TaskStore, TaskFilter};
//! use trackr::domain::TaskDraft;
//!
//! let mut store = TaskStore::open("tasks.json")?;
//! store.add(TaskDraft {
//!     description: "Write report".to_string(),
//!     due_date: Some("2024-01-02".to_string()),
//!     ..Default::default()
//! })?;
//! let pending = store.tasks(TaskFilter::Pending);
//! ```

mod expense_store;
mod record_store;
mod task_store;

pub use expense_store::{ExpenseStore, Period};
pub use record_store::RecordStore;
pub use task_store::{TaskFilter, TaskStore};
