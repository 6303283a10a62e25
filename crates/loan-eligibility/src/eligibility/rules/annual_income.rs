use tracing::debug;

use super::super::application::{ApplicationField, LoanApplication};
use super::parse;
use super::{CriteriaOutcome, EligibilityRule, FormatError};

/// Declared annual income must meet a floor.
#[derive(Debug, Clone)]
pub struct AnnualIncomeRule {
    minimum: f64,
}

impl AnnualIncomeRule {
    pub fn new(minimum: f64) -> Self {
        Self { minimum }
    }
}

impl EligibilityRule for AnnualIncomeRule {
    fn name(&self) -> &'static str {
        "annual_income"
    }

    fn validate_format(&self, application: &LoanApplication) -> Result<(), FormatError> {
        parse::amount(application, ApplicationField::AnnualIncome).map(|_| ())
    }

    fn validate_criteria(&self, application: &LoanApplication) -> CriteriaOutcome {
        let income = match parse::amount(application, ApplicationField::AnnualIncome) {
            Ok(value) => value,
            Err(err) => return CriteriaOutcome::rejected(err.to_string()),
        };
        debug!(income, minimum = self.minimum, "annual income criterion evaluated");

        if income >= self.minimum {
            CriteriaOutcome::Satisfied
        } else {
            CriteriaOutcome::rejected(format!("Annual income must be least {}", self.minimum))
        }
    }
}
