//! Eligibility rules. Each rule owns one attribute of a [`LoanApplication`]
//! and checks it twice: once for parseability, once against its threshold.

mod age;
mod annual_income;
mod expenditure;
mod loan_amount;
mod parse;

pub use age::AgeRule;
pub use annual_income::AnnualIncomeRule;
pub use expenditure::ExpenditureRule;
pub use loan_amount::LoanAmountRule;

use std::sync::Arc;

use chrono::NaiveDate;

use super::application::{ApplicationField, LoanApplication};
use super::config::EligibilityConfig;

/// Capability set every pluggable attribute validator provides.
pub trait EligibilityRule: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Check that the fields this rule reads can be parsed.
    fn validate_format(&self, application: &LoanApplication) -> Result<(), FormatError>;

    /// Compare the parsed attribute against the rule's threshold. Callers run
    /// this only after `validate_format` succeeded.
    fn validate_criteria(&self, application: &LoanApplication) -> CriteriaOutcome;
}

/// Shared handle to a rule; the caller keeps ownership of the rule itself.
pub type RuleHandle = Arc<dyn EligibilityRule>;

/// Result of a single criteria check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaOutcome {
    Satisfied,
    Rejected { reasons: Vec<String> },
}

impl CriteriaOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reasons: vec![reason.into()],
        }
    }

    /// Build an outcome from collected reasons; no reasons means satisfied.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        if reasons.is_empty() {
            Self::Satisfied
        } else {
            Self::Rejected { reasons }
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, CriteriaOutcome::Satisfied)
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            CriteriaOutcome::Satisfied => &[],
            CriteriaOutcome::Rejected { reasons } => reasons,
        }
    }

    pub fn into_reasons(self) -> Vec<String> {
        match self {
            CriteriaOutcome::Satisfied => Vec::new(),
            CriteriaOutcome::Rejected { reasons } => reasons,
        }
    }
}

/// Raised when a raw field cannot be parsed into the type a rule expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid date of birth")]
    DateOfBirth { value: String },
    #[error("{field} must be a numeric value")]
    NotNumeric {
        field: ApplicationField,
        value: String,
    },
    /// Any other parse failure a rule wants to describe in its own words.
    #[error("{message}")]
    Invalid {
        field: ApplicationField,
        message: String,
    },
}

impl FormatError {
    pub fn field(&self) -> ApplicationField {
        match self {
            FormatError::DateOfBirth { .. } => ApplicationField::DateOfBirth,
            FormatError::NotNumeric { field, .. } | FormatError::Invalid { field, .. } => *field,
        }
    }
}

/// Standard rule set in evaluation order: age, income, loan amount, expenditure.
/// Age is measured against the local date at evaluation time.
pub fn standard_rules(config: &EligibilityConfig) -> Vec<RuleHandle> {
    assemble(config, AgeRule::new(config.minimum_age))
}

/// Standard rule set with the age check pinned to `today`.
pub fn standard_rules_as_of(config: &EligibilityConfig, today: NaiveDate) -> Vec<RuleHandle> {
    assemble(config, AgeRule::as_of(config.minimum_age, today))
}

fn assemble(config: &EligibilityConfig, age: AgeRule) -> Vec<RuleHandle> {
    vec![
        Arc::new(age),
        Arc::new(AnnualIncomeRule::new(config.minimum_annual_income)),
        Arc::new(LoanAmountRule::with_ceiling(
            config.max_loan_to_income_percent,
            config.loan_ceiling,
        )),
        Arc::new(ExpenditureRule::new(config.max_monthly_expenditure)),
    ]
}
