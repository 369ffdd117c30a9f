//! Catalog service: add, remove, borrow, return and search

use std::sync::PoisonError;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{BookListing, BookRecord, BookStatus, NewBook, RemoveReport},
    repository::BookRepository,
};

use super::{today, SharedLoanPolicy};

#[derive(Clone)]
pub struct CatalogService {
    repository: BookRepository,
    policy: SharedLoanPolicy,
    protect_borrowed: bool,
}

impl CatalogService {
    pub fn new(
        repository: BookRepository,
        policy: SharedLoanPolicy,
        protect_borrowed: bool,
    ) -> Self {
        Self {
            repository,
            policy,
            protect_borrowed,
        }
    }

    /// Add a book to the catalog.
    ///
    /// Titles are compared exactly as given; the catalog keeps one record
    /// per title.
    pub fn add_book(&self, new: NewBook) -> AppResult<BookRecord> {
        new.validate()?;
        let NewBook {
            title,
            author,
            genre,
        } = new;
        let record = {
            let mut books = self.repository.write();
            if books.contains_key(&title) {
                return Err(AppError::DuplicateTitle(title));
            }
            let record = BookRecord::new(author, genre);
            books.insert(title.clone(), record.clone());
            record
        };
        self.repository.persist()?;
        tracing::info!("Catalog add: '{}'", title);
        Ok(record)
    }

    /// Remove a batch of titles from the catalog.
    ///
    /// Titles not present are skipped without error. When the service is
    /// configured to protect borrowed books, titles currently out on loan
    /// are kept and listed in the report instead of being deleted.
    pub fn remove_books(&self, titles: &[String]) -> AppResult<RemoveReport> {
        let mut report = RemoveReport::default();
        {
            let mut books = self.repository.write();
            for title in titles {
                match books.get(title) {
                    None => {}
                    Some(record) if self.protect_borrowed && record.is_borrowed() => {
                        report.skipped_borrowed.push(title.clone());
                    }
                    Some(_) => {
                        books.shift_remove(title);
                        report.removed += 1;
                    }
                }
            }
        }
        self.repository.persist()?;
        if report.skipped_borrowed.is_empty() {
            tracing::info!("Catalog remove: {} title(s) deleted", report.removed);
        } else {
            tracing::info!(
                "Catalog remove: {} title(s) deleted, {} kept on loan",
                report.removed,
                report.skipped_borrowed.len()
            );
        }
        Ok(report)
    }

    /// Borrow a book: stamps the borrower and the loan dates on the record.
    ///
    /// The due date comes from the loan policy in force right now; later
    /// policy changes do not touch loans already out.
    pub fn borrow_book(&self, title: &str, borrower: &str) -> AppResult<BookRecord> {
        let today = today();
        let due = self
            .policy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .due_date(today);
        let record = {
            let mut books = self.repository.write();
            let record = books
                .get_mut(title)
                .ok_or_else(|| AppError::NotFound(title.to_string()))?;
            if record.is_borrowed() {
                return Err(AppError::AlreadyBorrowed {
                    title: title.to_string(),
                    borrower: record.borrower.clone().unwrap_or_default(),
                });
            }
            record.status = BookStatus::Borrowed;
            record.borrower = Some(borrower.to_string());
            record.borrowed_date = Some(today);
            record.due_date = Some(due);
            record.borrow_count = record.borrow_count.saturating_add(1);
            record.clone()
        };
        self.repository.persist()?;
        tracing::info!("Catalog borrow: '{}' to {}, due {}", title, borrower, due);
        Ok(record)
    }

    /// Return a borrowed book, clearing the loan fields.
    ///
    /// The lifetime borrow counter is kept.
    pub fn return_book(&self, title: &str) -> AppResult<BookRecord> {
        let record = {
            let mut books = self.repository.write();
            let record = books
                .get_mut(title)
                .ok_or_else(|| AppError::NotFound(title.to_string()))?;
            if !record.is_borrowed() {
                return Err(AppError::NotBorrowed(title.to_string()));
            }
            record.clear_loan();
            record.clone()
        };
        self.repository.persist()?;
        tracing::info!("Catalog return: '{}'", title);
        Ok(record)
    }

    /// Search the catalog.
    ///
    /// Case-insensitive substring match against title, author or genre;
    /// an empty query lists the whole catalog. Rows come back in the
    /// order titles entered the catalog, with the display status derived
    /// for today.
    pub fn search_books(&self, query: &str) -> Vec<BookListing> {
        let needle = query.to_lowercase();
        let today = today();
        let books = self.repository.read();
        books
            .iter()
            .filter(|(title, record)| {
                title.to_lowercase().contains(&needle)
                    || record.author.to_lowercase().contains(&needle)
                    || record.genre.to_lowercase().contains(&needle)
            })
            .map(|(title, record)| BookListing::from_record(title, record, today))
            .collect()
    }
}
