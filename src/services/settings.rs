//! Settings service

use std::sync::PoisonError;

use crate::error::{AppError, AppResult};

use super::SharedLoanPolicy;

#[derive(Clone)]
pub struct SettingsService {
    policy: SharedLoanPolicy,
}

impl SettingsService {
    pub fn new(policy: SharedLoanPolicy) -> Self {
        Self { policy }
    }

    /// Loan period currently in force, in days
    pub fn loan_period_days(&self) -> u32 {
        self.policy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .period_days()
    }

    /// Change the loan period for subsequent borrows.
    ///
    /// Loans already out keep their original due date.
    pub fn set_loan_period(&self, days: i64) -> AppResult<u32> {
        if days <= 0 {
            return Err(AppError::InvalidPeriod(days));
        }
        let days = u32::try_from(days).map_err(|_| AppError::InvalidPeriod(days))?;
        self.policy
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_period_days(days);
        tracing::info!("Loan period set to {} day(s)", days);
        Ok(days)
    }
}
