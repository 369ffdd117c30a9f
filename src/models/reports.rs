//! Report rows for catalog statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a bulk remove. Titles that were skipped because they are
/// out on loan are listed so the caller can tell the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveReport {
    pub removed: usize,
    pub skipped_borrowed: Vec<String>,
}

/// One row of the most-borrowed ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularBook {
    pub title: String,
    pub author: String,
    pub borrow_count: u32,
}

/// One row of the overdue report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueBook {
    pub title: String,
    pub borrower: String,
    pub due_date: NaiveDate,
    pub days_past_due: i64,
}

/// One row of the active-borrower ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBorrower {
    pub name: String,
    pub active_loans: u32,
}

/// Headline counts for the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_titles: usize,
    pub available: usize,
    pub on_loan: usize,
    pub overdue: usize,
}
