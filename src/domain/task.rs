//! Task record and related types
//!
//! A task is one entry in the to-do list: a description, an optional due
//! date, a priority, and a completion flag. Drafts and patches carry the
//! raw form input; validation happens at the store boundary before any
//! mutation is applied.

use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Date format shared by both stores and the persisted files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(StoreError::Validation(format!(
                "priority must be Low, Medium, or High (got {:?})",
                other
            ))),
        }
    }
}

/// A single to-do entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// What needs doing (never empty)
    pub description: String,

    /// Optional due date in YYYY-MM-DD format
    pub due_date: Option<String>,

    /// Whether the task has been marked done
    #[serde(default)]
    pub completed: bool,

    /// Files written before the priority field existed default to Medium
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Presentation label for the completion flag
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// Parsed due date, if present and well-formed
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
    }

    /// Due within `0..=3` days of `today` and not yet completed.
    ///
    /// Unparseable due dates never match; legacy files may carry them and
    /// the due-soon view tolerates that rather than failing the whole query.
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        match self.due() {
            Some(due) => {
                let days = (due - today).num_days();
                (0..=3).contains(&days)
            }
            None => false,
        }
    }
}

/// Input for adding a task. Fields arrive as already-trimmed form text.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub description: String,
    pub due_date: Option<String>,
    pub priority: Priority,
}

impl TaskDraft {
    /// Validate and convert into a storable record with defaults applied.
    pub fn into_task(self) -> Result<Task> {
        validate_description(&self.description)?;
        if let Some(due) = self.due_date.as_deref() {
            validate_date(due, "due_date")?;
        }
        Ok(Task {
            description: self.description,
            due_date: self.due_date,
            completed: false,
            priority: self.priority,
        })
    }
}

/// Partial update for an existing task. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Apply this patch to a copy of `task`, validating the merged result.
    /// The original record is untouched on failure.
    pub fn apply_to(&self, task: &Task) -> Result<Task> {
        let mut merged = task.clone();
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(due_date) = &self.due_date {
            merged.due_date = Some(due_date.clone());
        }
        if let Some(priority) = self.priority {
            merged.priority = priority;
        }
        if let Some(completed) = self.completed {
            merged.completed = completed;
        }
        validate_description(&merged.description)?;
        if let Some(due) = merged.due_date.as_deref() {
            validate_date(due, "due_date")?;
        }
        Ok(merged)
    }
}

fn validate_description(description: &str) -> Result<()> {
    if description.is_empty() {
        return Err(StoreError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        StoreError::Validation(format!("{} must be in YYYY-MM-DD format (got {:?})", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_serde_names() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        let p: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn test_draft_applies_defaults() {
        let task = TaskDraft {
            description: "Write report".to_string(),
            ..Default::default()
        }
        .into_task()
        .unwrap();

        assert_eq!(task.description, "Write report");
        assert_eq!(task.due_date, None);
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_draft_rejects_empty_description() {
        let err = TaskDraft::default().into_task().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_draft_rejects_malformed_due_date() {
        let err = TaskDraft {
            description: "x".to_string(),
            due_date: Some("01/02/2024".to_string()),
            ..Default::default()
        }
        .into_task()
        .unwrap_err();
        assert!(err.to_string().contains("due_date"));
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let task = Task {
            description: "Write report".to_string(),
            due_date: Some("2024-01-02".to_string()),
            completed: false,
            priority: Priority::High,
        };

        let merged = TaskPatch {
            description: Some("Write final report".to_string()),
            ..Default::default()
        }
        .apply_to(&task)
        .unwrap();

        assert_eq!(merged.description, "Write final report");
        assert_eq!(merged.due_date, Some("2024-01-02".to_string()));
        assert_eq!(merged.priority, Priority::High);
    }

    #[test]
    fn test_patch_rejects_invalid_merge() {
        let task = Task {
            description: "Write report".to_string(),
            due_date: None,
            completed: false,
            priority: Priority::Medium,
        };

        let err = TaskPatch {
            due_date: Some("soon".to_string()),
            ..Default::default()
        }
        .apply_to(&task)
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_due_soon_window() {
        let today = date("2024-01-01");
        let mut task = Task {
            description: "x".to_string(),
            due_date: Some("2024-01-02".to_string()),
            completed: false,
            priority: Priority::Medium,
        };
        assert!(task.is_due_soon(today));

        task.due_date = Some("2024-01-04".to_string());
        assert!(task.is_due_soon(today)); // 3 days out, inclusive

        task.due_date = Some("2024-01-05".to_string());
        assert!(!task.is_due_soon(today)); // 4 days out

        task.due_date = Some("2023-12-31".to_string());
        assert!(!task.is_due_soon(today)); // already past
    }

    #[test]
    fn test_due_soon_excludes_completed_and_unparseable() {
        let today = date("2024-01-01");
        let task = Task {
            description: "x".to_string(),
            due_date: Some("2024-01-02".to_string()),
            completed: true,
            priority: Priority::Medium,
        };
        assert!(!task.is_due_soon(today));

        let task = Task {
            description: "x".to_string(),
            due_date: Some("not-a-date".to_string()),
            completed: false,
            priority: Priority::Medium,
        };
        assert!(!task.is_due_soon(today));
    }

    #[test]
    fn test_status_label() {
        let mut task = Task {
            description: "x".to_string(),
            due_date: None,
            completed: false,
            priority: Priority::Medium,
        };
        assert_eq!(task.status_label(), "Pending");
        task.completed = true;
        assert_eq!(task.status_label(), "Completed");
    }

    #[test]
    fn test_task_deserializes_without_priority_field() {
        // Files written before the priority field existed
        let task: Task =
            serde_json::from_str(r#"{"description": "old", "due_date": null, "completed": false}"#)
                .unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }
}
