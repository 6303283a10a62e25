use tracing::debug;

use super::super::application::{ApplicationField, LoanApplication};
use super::super::config::{LoanCeiling, DEFAULT_MAX_LOAN_TO_INCOME_PERCENT};
use super::parse;
use super::{CriteriaOutcome, EligibilityRule, FormatError};

/// Requested loan is capped at a percentage of annual income.
#[derive(Debug, Clone)]
pub struct LoanAmountRule {
    max_income_percent: f64,
    ceiling: LoanCeiling,
}

impl Default for LoanAmountRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOAN_TO_INCOME_PERCENT)
    }
}

impl LoanAmountRule {
    pub fn new(max_income_percent: f64) -> Self {
        Self::with_ceiling(max_income_percent, LoanCeiling::default())
    }

    pub fn with_ceiling(max_income_percent: f64, ceiling: LoanCeiling) -> Self {
        Self {
            max_income_percent,
            ceiling,
        }
    }

    pub fn max_for_income(&self, annual_income: f64) -> f64 {
        annual_income * self.max_income_percent / 100.0
    }

    fn parsed(&self, application: &LoanApplication) -> Result<(f64, f64), FormatError> {
        let loan = parse::amount(application, ApplicationField::LoanAmount)?;
        let income = parse::amount(application, ApplicationField::AnnualIncome)?;
        Ok((loan, income))
    }

    fn reason(&self) -> String {
        match self.ceiling {
            LoanCeiling::Inclusive => format!(
                "Loan amount must not exceed {}% of annual income",
                self.max_income_percent
            ),
            LoanCeiling::Exclusive => format!(
                "Loan amount must be less than {}% of annual income",
                self.max_income_percent
            ),
        }
    }
}

impl EligibilityRule for LoanAmountRule {
    fn name(&self) -> &'static str {
        "loan_amount"
    }

    fn validate_format(&self, application: &LoanApplication) -> Result<(), FormatError> {
        self.parsed(application).map(|_| ())
    }

    fn validate_criteria(&self, application: &LoanApplication) -> CriteriaOutcome {
        let (loan, income) = match self.parsed(application) {
            Ok(values) => values,
            Err(err) => return CriteriaOutcome::rejected(err.to_string()),
        };

        let cap = self.max_for_income(income);
        debug!(loan, cap, ceiling = ?self.ceiling, "loan amount criterion evaluated");

        if self.ceiling.permits(loan, cap) {
            CriteriaOutcome::Satisfied
        } else {
            CriteriaOutcome::rejected(self.reason())
        }
    }
}
