//! Statistics reports over seeded catalog files

use chrono::{Duration, Utc};
use serde_json::json;

use crate::common::seeded_library;

#[test]
fn test_worked_overdue_example() {
    // Borrowed eight days ago with a seven-day period: one day late today
    let today = Utc::now().date_naive();
    let borrowed = today - Duration::days(8);
    let due = today - Duration::days(1);
    let seed = json!({
        "Dune": {
            "author": "Frank Herbert",
            "genre": "Science Fiction",
            "status": "borrowed",
            "borrower": "Alice",
            "borrowed_date": borrowed.to_string(),
            "due_date": due.to_string(),
            "borrow_count": 1
        }
    });
    let (_dir, library) = seeded_library(&seed);

    let rows = library.services.stats.overdue_books();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Dune");
    assert_eq!(rows[0].borrower, "Alice");
    assert_eq!(rows[0].due_date, due);
    assert_eq!(rows[0].days_past_due, 1);

    // The catalog view shows the same loan as overdue
    let listing = &library.services.catalog.search_books("Dune")[0];
    assert_eq!(listing.status.to_string(), "overdue");

    // Returning the book clears the report
    library.services.catalog.return_book("Dune").unwrap();
    assert!(library.services.stats.overdue_books().is_empty());
}

#[test]
fn test_book_on_its_due_date_is_not_overdue() {
    let today = Utc::now().date_naive();
    let seed = json!({
        "Dune": {
            "author": "Frank Herbert",
            "genre": "Science Fiction",
            "status": "borrowed",
            "borrower": "Alice",
            "borrowed_date": (today - Duration::days(7)).to_string(),
            "due_date": today.to_string(),
            "borrow_count": 1
        }
    });
    let (_dir, library) = seeded_library(&seed);

    assert!(library.services.stats.overdue_books().is_empty());
    let listing = &library.services.catalog.search_books("Dune")[0];
    assert_eq!(listing.status.to_string(), "borrowed");
}

#[test]
fn test_overdue_report_sorts_most_late_first() {
    let today = Utc::now().date_naive();
    let loan = |days_late: i64, borrower: &str| {
        json!({
            "author": "author",
            "genre": "genre",
            "status": "borrowed",
            "borrower": borrower,
            "borrowed_date": (today - Duration::days(days_late + 7)).to_string(),
            "due_date": (today - Duration::days(days_late)).to_string(),
            "borrow_count": 1
        })
    };
    let seed = json!({
        "A little late": loan(2, "Alice"),
        "Very late": loan(30, "Bob"),
        "Slightly late": loan(1, "Carol")
    });
    let (_dir, library) = seeded_library(&seed);

    let rows = library.services.stats.overdue_books();
    let late: Vec<(String, i64)> = rows
        .into_iter()
        .map(|row| (row.title, row.days_past_due))
        .collect();
    assert_eq!(
        late,
        [
            ("Very late".to_string(), 30),
            ("A little late".to_string(), 2),
            ("Slightly late".to_string(), 1)
        ]
    );
}

#[test]
fn test_popular_books_ranking() {
    let record = |author: &str, count: u32| {
        json!({
            "author": author,
            "genre": "genre",
            "status": "available",
            "borrower": null,
            "borrowed_date": null,
            "due_date": null,
            "borrow_count": count
        })
    };
    let seed = json!({
        "Dune": record("Frank Herbert", 3),
        "Emma": record("Jane Austen", 0),
        "Middlemarch": record("George Eliot", 7)
    });
    let (_dir, library) = seeded_library(&seed);

    let rows = library.services.stats.popular_books();
    let titles: Vec<String> = rows.iter().map(|row| row.title.clone()).collect();
    // Never-borrowed titles stay out of the ranking
    assert_eq!(titles, ["Middlemarch", "Dune"]);
    assert_eq!(rows[0].borrow_count, 7);
    assert_eq!(rows[0].author, "George Eliot");
}

#[test]
fn test_top_borrowers_counts_current_loans_only() {
    let today = Utc::now().date_naive();
    let loan = |borrower: &str, count: u32| {
        json!({
            "author": "author",
            "genre": "genre",
            "status": "borrowed",
            "borrower": borrower,
            "borrowed_date": today.to_string(),
            "due_date": (today + Duration::days(7)).to_string(),
            "borrow_count": count
        })
    };
    let seed = json!({
        "Book one": loan("Alice", 1),
        "Book two": loan("Bob", 1),
        "Book three": loan("Alice", 1),
        // Heavily borrowed in the past, but on the shelf right now
        "Book four": {
            "author": "author",
            "genre": "genre",
            "status": "available",
            "borrower": null,
            "borrowed_date": null,
            "due_date": null,
            "borrow_count": 40
        }
    });
    let (_dir, library) = seeded_library(&seed);

    let rows = library.services.stats.top_borrowers();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].active_loans, 2);
    assert_eq!(rows[1].name, "Bob");
    assert_eq!(rows[1].active_loans, 1);
}

#[test]
fn test_summary_agrees_with_the_reports() {
    let today = Utc::now().date_naive();
    let seed = json!({
        "On the shelf": {
            "author": "author",
            "genre": "genre",
            "status": "available",
            "borrower": null,
            "borrowed_date": null,
            "due_date": null,
            "borrow_count": 2
        },
        "Out": {
            "author": "author",
            "genre": "genre",
            "status": "borrowed",
            "borrower": "Alice",
            "borrowed_date": today.to_string(),
            "due_date": (today + Duration::days(7)).to_string(),
            "borrow_count": 1
        },
        "Late": {
            "author": "author",
            "genre": "genre",
            "status": "borrowed",
            "borrower": "Bob",
            "borrowed_date": (today - Duration::days(10)).to_string(),
            "due_date": (today - Duration::days(3)).to_string(),
            "borrow_count": 1
        }
    });
    let (_dir, library) = seeded_library(&seed);

    let summary = library.services.stats.summary();
    assert_eq!(summary.total_titles, 3);
    assert_eq!(summary.available, 1);
    assert_eq!(summary.on_loan, 2);
    assert_eq!(summary.overdue, 1);

    assert_eq!(
        summary.overdue,
        library.services.stats.overdue_books().len()
    );
    assert_eq!(
        summary.on_loan,
        library.services.stats.top_borrowers().len()
    );
}
