//! To-do list store.
//!
//! Wraps the generic `RecordStore` with task validation, partial-merge edit
//! semantics, and the named filters the list view renders from. Every
//! mutation persists before returning; a failed mutation leaves both memory
//! and the file as they were.

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::domain::task::{Task, TaskDraft, TaskPatch};
use crate::error::Result;
use crate::store::RecordStore;

/// Named read-only views over the task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Pending,
    /// Not completed, due date parseable and within 0-3 days of today
    DueSoon,
}

/// The to-do list: an ordered task sequence backed by one JSON file.
#[derive(Debug)]
pub struct TaskStore {
    inner: RecordStore<Task>,
}

impl TaskStore {
    /// Open the store at `path`, loading existing tasks.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            inner: RecordStore::open(path)?,
        })
    }

    /// Start from an empty list, ignoring any existing file (recovery path
    /// after `open` reports corrupt data).
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            inner: RecordStore::empty(path),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Task at a backing-sequence index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.inner.get(index)
    }

    /// Validate the draft, append with defaults applied, persist.
    pub fn add(&mut self, draft: TaskDraft) -> Result<()> {
        let task = draft.into_task()?;
        log::debug!("Adding task {:?}", task.description);
        self.inner.push(task)
    }

    /// Partial-merge edit: fields left `None` in the patch are unchanged.
    /// The merged record is validated before anything is applied.
    pub fn edit(&mut self, index: usize, patch: TaskPatch) -> Result<()> {
        self.inner.check_index(index)?;
        let merged = patch.apply_to(&self.inner.records()[index])?;
        self.inner.replace(index, merged)
    }

    /// Remove the task at `index`; later tasks shift left.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.inner.remove(index)
    }

    /// Set the completed flag on the task at `index`.
    pub fn mark_completed(&mut self, index: usize) -> Result<()> {
        self.inner.check_index(index)?;
        let mut task = self.inner.records()[index].clone();
        task.completed = true;
        self.inner.replace(index, task)
    }

    /// Tasks matching `filter`, as an owned snapshot in sequence order.
    /// Due-soon is evaluated against today's local date.
    pub fn tasks(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks_on(filter, Local::now().date_naive())
    }

    /// As `tasks`, with an explicit "today" for the due-soon window.
    pub fn tasks_on(&self, filter: TaskFilter, today: NaiveDate) -> Vec<Task> {
        self.inner
            .records()
            .iter()
            .filter(|t| Self::matches(t, filter, today))
            .cloned()
            .collect()
    }

    /// Map a selection in a filtered view back to its backing-sequence
    /// index. Returns `None` if `filtered_index` is past the end of the
    /// filtered view (a stale selection).
    pub fn resolve(&self, filter: TaskFilter, filtered_index: usize) -> Option<usize> {
        self.resolve_on(filter, filtered_index, Local::now().date_naive())
    }

    /// As `resolve`, with an explicit "today" for the due-soon window.
    pub fn resolve_on(
        &self,
        filter: TaskFilter,
        filtered_index: usize,
        today: NaiveDate,
    ) -> Option<usize> {
        self.inner
            .records()
            .iter()
            .enumerate()
            .filter(|(_, t)| Self::matches(t, filter, today))
            .nth(filtered_index)
            .map(|(i, _)| i)
    }

    fn matches(task: &Task, filter: TaskFilter, today: NaiveDate) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
            TaskFilter::DueSoon => task.is_due_soon(today),
        }
    }
}
