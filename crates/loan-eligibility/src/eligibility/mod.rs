//! Loan application eligibility: raw applications, pluggable rules, and the
//! service that runs them.

pub mod application;
pub mod config;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use application::{ApplicationField, LoanApplication};
pub use config::{EligibilityConfig, LoanCeiling};
pub use rules::{
    standard_rules, standard_rules_as_of, AgeRule, AnnualIncomeRule, CriteriaOutcome,
    EligibilityRule, ExpenditureRule, FormatError, LoanAmountRule, RuleHandle,
};
pub use service::{EligibilityReport, LoanApplicationInvalid, LoanValidationService};
