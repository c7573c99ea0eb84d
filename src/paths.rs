//! Default backing-file locations.
//!
//! The stores accept any path; these helpers give embedding applications the
//! conventional per-user locations under the platform data directory.

use eyre::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Per-user data directory for trackr files, created on first use.
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| eyre::eyre!("Cannot determine data directory"))?
        .join("trackr");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir)
}

/// Default backing file for the task store.
pub fn default_tasks_file() -> Result<PathBuf> {
    Ok(data_dir()?.join("tasks.json"))
}

/// Default backing file for the expense store.
pub fn default_expenses_file() -> Result<PathBuf> {
    Ok(data_dir()?.join("expenses.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        // Only assert the tail; the data dir is platform-dependent.
        let tasks = default_tasks_file().unwrap();
        assert!(tasks.ends_with("trackr/tasks.json"));
        let expenses = default_expenses_file().unwrap();
        assert!(expenses.ends_with("trackr/expenses.json"));
    }
}
