use chrono::{Local, NaiveDate};
use tracing::debug;

use super::super::application::LoanApplication;
use super::parse;
use super::{CriteriaOutcome, EligibilityRule, FormatError};

/// Applicant must be at least `minimum_age` whole years old.
#[derive(Debug, Clone)]
pub struct AgeRule {
    minimum_age: u32,
    reference: ReferenceDate,
}

#[derive(Debug, Clone, Copy)]
enum ReferenceDate {
    Today,
    Fixed(NaiveDate),
}

impl AgeRule {
    /// Age is measured against the local date at evaluation time.
    pub fn new(minimum_age: u32) -> Self {
        Self {
            minimum_age,
            reference: ReferenceDate::Today,
        }
    }

    /// Age is measured against a pinned date.
    pub fn as_of(minimum_age: u32, today: NaiveDate) -> Self {
        Self {
            minimum_age,
            reference: ReferenceDate::Fixed(today),
        }
    }

    fn today(&self) -> NaiveDate {
        match self.reference {
            ReferenceDate::Today => Local::now().date_naive(),
            ReferenceDate::Fixed(date) => date,
        }
    }
}

impl EligibilityRule for AgeRule {
    fn name(&self) -> &'static str {
        "age"
    }

    fn validate_format(&self, application: &LoanApplication) -> Result<(), FormatError> {
        parse::date_of_birth(application).map(|_| ())
    }

    fn validate_criteria(&self, application: &LoanApplication) -> CriteriaOutcome {
        let born = match parse::date_of_birth(application) {
            Ok(date) => date,
            Err(err) => return CriteriaOutcome::rejected(err.to_string()),
        };

        let age = parse::age_on(born, self.today());
        debug!(age, minimum = self.minimum_age, "age criterion evaluated");

        if age >= self.minimum_age {
            CriteriaOutcome::Satisfied
        } else {
            CriteriaOutcome::rejected(format!("Age must be least {}", self.minimum_age))
        }
    }
}
