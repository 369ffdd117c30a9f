//! Book record model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Stored lending state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
}

// ---------------------------------------------------------------------------
// DisplayStatus
// ---------------------------------------------------------------------------

/// Status as shown to the user. `Overdue` is derived from the stored
/// status and the due date; it is never written to the catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Available,
    Borrowed,
    Overdue,
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DisplayStatus::Available => "available",
            DisplayStatus::Borrowed => "borrowed",
            DisplayStatus::Overdue => "overdue",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BookRecord
// ---------------------------------------------------------------------------

/// One catalog entry, keyed by title in the catalog mapping.
///
/// Loan fields are `None` while the book sits on the shelf. Older catalog
/// files may omit `borrow_count` entirely; it defaults to zero on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub author: String,
    pub genre: String,
    pub status: BookStatus,
    #[serde(default)]
    pub borrower: Option<String>,
    #[serde(default)]
    pub borrowed_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub borrow_count: u32,
}

impl BookRecord {
    /// Fresh record for a book entering the catalog
    pub fn new(author: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            genre: genre.into(),
            status: BookStatus::Available,
            borrower: None,
            borrowed_date: None,
            due_date: None,
            borrow_count: 0,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        self.status == BookStatus::Borrowed
    }

    /// Status to display for the given calendar date. A borrowed book
    /// whose due date lies strictly before `today` shows as overdue.
    pub fn display_status(&self, today: NaiveDate) -> DisplayStatus {
        match self.status {
            BookStatus::Available => DisplayStatus::Available,
            BookStatus::Borrowed => match self.due_date {
                Some(due) if due < today => DisplayStatus::Overdue,
                _ => DisplayStatus::Borrowed,
            },
        }
    }

    /// Put the record back on the shelf, dropping all loan fields
    pub(crate) fn clear_loan(&mut self) {
        self.status = BookStatus::Available;
        self.borrower = None;
        self.borrowed_date = None;
        self.due_date = None;
    }
}

// ---------------------------------------------------------------------------
// NewBook
// ---------------------------------------------------------------------------

/// Payload for adding a book to the catalog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
}

// ---------------------------------------------------------------------------
// BookListing
// ---------------------------------------------------------------------------

/// One row of a catalog view, with the display status already derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListing {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: DisplayStatus,
    pub borrower: Option<String>,
    pub borrowed_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub borrow_count: u32,
}

impl BookListing {
    pub fn from_record(title: &str, record: &BookRecord, today: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            author: record.author.clone(),
            genre: record.genre.clone(),
            status: record.display_status(today),
            borrower: record.borrower.clone(),
            borrowed_date: record.borrowed_date,
            due_date: record.due_date,
            borrow_count: record.borrow_count,
        }
    }
}
