//! Statistics service

use indexmap::IndexMap;

use crate::{
    models::{CatalogSummary, DisplayStatus, OverdueBook, PopularBook, TopBorrower},
    repository::BookRepository,
};

use super::today;

#[derive(Clone)]
pub struct StatsService {
    repository: BookRepository,
}

impl StatsService {
    pub fn new(repository: BookRepository) -> Self {
        Self { repository }
    }

    /// Most-borrowed ranking over the lifetime counters.
    ///
    /// Books never borrowed are left out. The sort is stable, so titles
    /// with equal counts keep their catalog order.
    pub fn popular_books(&self) -> Vec<PopularBook> {
        let books = self.repository.read();
        let mut rows: Vec<PopularBook> = books
            .iter()
            .filter(|(_, record)| record.borrow_count > 0)
            .map(|(title, record)| PopularBook {
                title: title.clone(),
                author: record.author.clone(),
                borrow_count: record.borrow_count,
            })
            .collect();
        drop(books);
        rows.sort_by(|a, b| b.borrow_count.cmp(&a.borrow_count));
        rows
    }

    /// Loans past their due date.
    ///
    /// A book is overdue only once today is strictly past the due date;
    /// on the due date itself it is still just borrowed. Most-late first.
    pub fn overdue_books(&self) -> Vec<OverdueBook> {
        let today = today();
        let books = self.repository.read();
        let mut rows: Vec<OverdueBook> = books
            .iter()
            .filter_map(|(title, record)| {
                if !record.is_borrowed() {
                    return None;
                }
                let due = record.due_date?;
                if due >= today {
                    return None;
                }
                Some(OverdueBook {
                    title: title.clone(),
                    borrower: record.borrower.clone().unwrap_or_default(),
                    due_date: due,
                    days_past_due: (today - due).num_days(),
                })
            })
            .collect();
        drop(books);
        rows.sort_by(|a, b| b.days_past_due.cmp(&a.days_past_due));
        rows
    }

    /// Borrowers ranked by how many books they have out right now.
    ///
    /// Records borrowed without a borrower name are skipped. Ties keep
    /// the order borrowers were first seen while scanning the catalog.
    pub fn top_borrowers(&self) -> Vec<TopBorrower> {
        let books = self.repository.read();
        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for record in books.values() {
            if !record.is_borrowed() {
                continue;
            }
            match record.borrower.as_deref() {
                Some(name) if !name.is_empty() => {
                    *counts.entry(name.to_string()).or_insert(0) += 1;
                }
                _ => {}
            }
        }
        drop(books);
        let mut rows: Vec<TopBorrower> = counts
            .into_iter()
            .map(|(name, active_loans)| TopBorrower { name, active_loans })
            .collect();
        rows.sort_by(|a, b| b.active_loans.cmp(&a.active_loans));
        rows
    }

    /// Headline counts for the whole catalog
    pub fn summary(&self) -> CatalogSummary {
        let today = today();
        let books = self.repository.read();
        let mut summary = CatalogSummary {
            total_titles: books.len(),
            ..CatalogSummary::default()
        };
        for record in books.values() {
            match record.display_status(today) {
                DisplayStatus::Available => summary.available += 1,
                DisplayStatus::Borrowed => summary.on_loan += 1,
                DisplayStatus::Overdue => {
                    // Overdue loans are still out, so they count both ways
                    summary.on_loan += 1;
                    summary.overdue += 1;
                }
            }
        }
        summary
    }
}
