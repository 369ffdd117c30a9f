//! Data models for Shelfmark

pub mod book;
pub mod policy;
pub mod reports;

// Re-export commonly used types
pub use book::{BookListing, BookRecord, BookStatus, DisplayStatus, NewBook};
pub use policy::LoanPolicy;
pub use reports::{CatalogSummary, OverdueBook, PopularBook, RemoveReport, TopBorrower};
