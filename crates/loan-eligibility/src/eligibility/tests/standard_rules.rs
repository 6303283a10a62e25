use std::sync::Arc;

use super::common::*;
use crate::eligibility::application::LoanApplication;
use crate::eligibility::config::{EligibilityConfig, LoanCeiling};
use crate::eligibility::rules::{AnnualIncomeRule, ExpenditureRule, LoanAmountRule, RuleHandle};
use crate::eligibility::service::{LoanApplicationInvalid, LoanValidationService};

fn standard_service() -> LoanValidationService {
    LoanValidationService::new(pinned_rules(&EligibilityConfig::default()))
}

#[test]
fn from_config_orders_standard_rules() {
    let service = LoanValidationService::from_config(&EligibilityConfig::default());

    assert_eq!(
        service.rules(),
        vec![
            "age",
            "annual_income",
            "loan_amount",
            "residential_monthly_expenditure"
        ]
    );
}

#[test]
fn eligible_application_passes_every_rule() {
    let mut service = standard_service();

    assert_eq!(service.validate(&eligible_application()), Ok(true));
    assert!(service.errors().is_empty());
}

#[test]
fn young_applicant_is_rejected_for_age() {
    let mut service = standard_service();
    let application = LoanApplication::new("2000-02-20", "50000", "10000", "900");

    assert_eq!(service.validate(&application), Ok(false));
    assert_eq!(service.errors(), ["Age must be least 25"]);
}

#[test]
fn low_income_is_rejected() {
    let rule: RuleHandle = Arc::new(AnnualIncomeRule::new(25_000.0));
    let mut service = LoanValidationService::new(vec![rule]);
    let application = LoanApplication::new("2000-02-20", "20000", "1000", "900");

    assert_eq!(service.validate(&application), Ok(false));
    assert_eq!(service.errors(), ["Annual income must be least 25000"]);
}

#[test]
fn currency_symbol_in_loan_amount_invalidates_application() {
    let mut service = standard_service();
    let application = LoanApplication::new("1997-02-20", "50000", "£10000", "900");

    let err = service
        .validate(&application)
        .expect_err("loan amount is not numeric");
    assert_eq!(err, LoanApplicationInvalid);
    assert_eq!(err.to_string(), "Loan application invalid");
}

#[test]
fn expenditure_ceiling_is_strict() {
    let rule: RuleHandle = Arc::new(ExpenditureRule::new(1_000.0));
    let mut service = LoanValidationService::new(vec![rule]);

    let within = LoanApplication::new("1990-01-01", "50000", "1000", "900");
    assert_eq!(service.validate(&within), Ok(true));

    let over = LoanApplication::new("1990-01-01", "50000", "1000", "1100");
    assert_eq!(service.validate(&over), Ok(false));
    assert!(service.errors()[0].contains("1000"));
}

#[test]
fn every_failing_rule_is_reported() {
    let mut service = standard_service();
    let application = LoanApplication::new("2000-02-20", "20000", "15000", "1100");

    assert_eq!(service.validate(&application), Ok(false));
    assert_eq!(
        service.errors(),
        [
            "Age must be least 25",
            "Annual income must be least 25000",
            "Loan amount must not exceed 20% of annual income",
            "Residential monthly expenditure must be less than 1000",
        ]
    );
}

#[test]
fn exclusive_loan_ceiling_rejects_loan_at_cap() {
    let config = EligibilityConfig {
        loan_ceiling: LoanCeiling::Exclusive,
        ..EligibilityConfig::default()
    };
    let mut inclusive = standard_service();
    let mut exclusive = LoanValidationService::new(pinned_rules(&config));
    let at_cap = LoanApplication::new("1990-02-20", "50000", "10000", "900");

    assert_eq!(inclusive.validate(&at_cap), Ok(true));
    assert_eq!(exclusive.validate(&at_cap), Ok(false));
    assert_eq!(
        exclusive.errors(),
        ["Loan amount must be less than 20% of annual income"]
    );
}

#[test]
fn custom_loan_percentage_is_reported() {
    let rule: RuleHandle = Arc::new(LoanAmountRule::new(10.0));
    let mut service = LoanValidationService::new(vec![rule]);
    let application = LoanApplication::new("1990-02-20", "50000", "6000", "900");

    assert_eq!(service.validate(&application), Ok(false));
    assert_eq!(
        service.errors(),
        ["Loan amount must not exceed 10% of annual income"]
    );
}
