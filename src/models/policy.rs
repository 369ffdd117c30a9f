//! Loan policy settings

use chrono::{Duration, NaiveDate};

/// Loan period applied when no override is configured
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 7;

/// Lending rules in force for new borrows.
///
/// The policy is consulted at borrow time only; loans already out keep
/// the due date they were stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    period_days: u32,
}

impl LoanPolicy {
    pub fn new(period_days: u32) -> Self {
        Self { period_days }
    }

    pub fn period_days(&self) -> u32 {
        self.period_days
    }

    pub fn set_period_days(&mut self, period_days: u32) {
        self.period_days = period_days;
    }

    /// Due date for a loan starting on `borrowed`
    pub fn due_date(&self, borrowed: NaiveDate) -> NaiveDate {
        borrowed
            .checked_add_signed(Duration::days(i64::from(self.period_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_LOAN_PERIOD_DAYS,
        }
    }
}
