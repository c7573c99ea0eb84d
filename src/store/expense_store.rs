//! Expense tracker store.
//!
//! Wraps the generic `RecordStore` with expense validation, full-record
//! replace on edit (intentionally different from the task store's partial
//! merge), and the aggregation queries the summary view renders from.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Datelike;

use crate::domain::expense::{Expense, ExpenseDraft};
use crate::domain::task::DATE_FORMAT;
use crate::error::{Result, StoreError};
use crate::store::RecordStore;

/// Bucketing granularity for spending-over-time summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

/// The expense ledger: an ordered expense sequence backed by one JSON file.
#[derive(Debug)]
pub struct ExpenseStore {
    inner: RecordStore<Expense>,
}

impl ExpenseStore {
    /// Open the store at `path`, loading existing expenses.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            inner: RecordStore::open(path)?,
        })
    }

    /// Start from an empty ledger, ignoring any existing file (recovery path
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

    /// Expense at a backing-sequence index.
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.inner.get(index)
    }

    /// Owned snapshot of the full sequence, in insertion order.
    pub fn expenses(&self) -> Vec<Expense> {
        self.inner.records().to_vec()
    }

    /// Validate the draft (absent date becomes today), append, persist.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<()> {
        let expense = draft.into_expense()?;
        log::debug!("Adding expense {} in {:?}", expense.amount, expense.category);
        self.inner.push(expense)
    }

    /// Full-record replace: the draft supplies every field. Validation
    /// failure leaves the record at `index` unchanged.
    pub fn edit(&mut self, index: usize, draft: ExpenseDraft) -> Result<()> {
        self.inner.check_index(index)?;
        let expense = draft.into_expense()?;
        self.inner.replace(index, expense)
    }

    /// Remove the expense at `index`; later expenses shift left.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.inner.remove(index)
    }

    /// Sum of all amounts.
    pub fn total(&self) -> f64 {
        self.inner.records().iter().map(|e| e.amount).sum()
    }

    /// Sum of amounts whose category matches exactly.
    pub fn total_by_category(&self, category: &str) -> f64 {
        self.inner
            .records()
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .inner
            .records()
            .iter()
            .map(|e| e.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Spending bucketed by calendar period, keyed `YYYY-MM-DD` (daily),
    /// `{year}-W{week}` (weekly, ISO week number), or `YYYY-MM` (monthly).
    /// Keys iterate in sorted order.
    ///
    /// A stored date that no longer parses means the file was edited by
    /// hand; that surfaces as `CorruptData` rather than silently dropping
    /// the amount from the summary.
    pub fn totals_over_time(&self, period: Period) -> Result<BTreeMap<String, f64>> {
        let mut summary = BTreeMap::new();
        for expense in self.inner.records() {
            let date = expense.parsed_date().ok_or_else(|| StoreError::CorruptData {
                path: self.inner.path().to_path_buf(),
                reason: format!("expense date {:?} is not YYYY-MM-DD", expense.date),
            })?;
            let key = match period {
                Period::Daily => date.format(DATE_FORMAT).to_string(),
                Period::Weekly => format!("{}-W{}", date.year(), date.iso_week().week()),
                Period::Monthly => date.format("%Y-%m").to_string(),
            };
            *summary.entry(key).or_insert(0.0) += expense.amount;
        }
        Ok(summary)
    }
}
