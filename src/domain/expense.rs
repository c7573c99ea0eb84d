//! Expense record and related types
//!
//! An expense is an amount spent in a category on a date. The amount arrives
//! from the form as text and is coerced during validation; the date defaults
//! to today only when absent, never when malformed.

use crate::domain::task::{DATE_FORMAT, validate_date};
use crate::error::{Result, StoreError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single expense entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Spent amount (finite, non-negative)
    pub amount: f64,

    /// Spending category (never empty)
    pub category: String,

    /// Date of the expense in YYYY-MM-DD format (always present)
    pub date: String,
}

impl Expense {
    /// Parsed expense date. Stored records always carry a date that was
    /// validated on the way in, so failure means the file was hand-edited.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Input for adding or replacing an expense. Fields arrive as already-trimmed
/// form text; `amount` is coerced to a number during validation.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub date: Option<String>,
}

impl ExpenseDraft {
    /// Validate and convert into a storable record. An absent date becomes
    /// today's local date; a malformed date is rejected outright.
    pub fn into_expense(self) -> Result<Expense> {
        self.into_expense_on(Local::now().date_naive())
    }

    /// As `into_expense`, with an explicit "today" for the date default.
    pub fn into_expense_on(self, today: NaiveDate) -> Result<Expense> {
        let amount = parse_amount(&self.amount)?;
        if self.category.is_empty() {
            return Err(StoreError::Validation(
                "category must not be empty".to_string(),
            ));
        }
        let date = match self.date {
            Some(date) => {
                validate_date(&date, "date")?;
                date
            }
            None => today.format(DATE_FORMAT).to_string(),
        };
        Ok(Expense {
            amount,
            category: self.category,
            date,
        })
    }
}

fn parse_amount(raw: &str) -> Result<f64> {
    let amount: f64 = raw.parse().map_err(|_| {
        StoreError::Validation(format!("amount must be a number (got {:?})", raw))
    })?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(StoreError::Validation(format!(
            "amount must be a non-negative number (got {})",
            amount
        )));
    }
    Ok(amount)
}
