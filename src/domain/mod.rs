//! Domain types for trackr
//!
//! This module contains the two record types and their input shapes:
//! - Task: one to-do entry, with TaskDraft (add) and TaskPatch (partial edit)
//! - Expense: one spending entry, with ExpenseDraft (add and full-replace edit)
//!
//! Drafts and patches carry raw form text; validation runs at the store
//! boundary so a rejected input never touches the stored sequence.

pub mod expense;
pub mod task;

pub use expense::{Expense, ExpenseDraft};
pub use task::{DATE_FORMAT, Priority, Task, TaskDraft, TaskPatch};
