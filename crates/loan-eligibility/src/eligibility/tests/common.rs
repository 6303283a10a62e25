use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::eligibility::application::{ApplicationField, LoanApplication};
use crate::eligibility::config::EligibilityConfig;
use crate::eligibility::rules::{
    standard_rules_as_of, CriteriaOutcome, EligibilityRule, FormatError, RuleHandle,
};

/// Rule with canned answers that records how often each phase ran.
pub(super) struct StubRule {
    name: &'static str,
    format: Result<(), FormatError>,
    outcome: CriteriaOutcome,
    format_calls: AtomicUsize,
    criteria_calls: AtomicUsize,
}

impl StubRule {
    pub(super) fn passing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            format: Ok(()),
            outcome: CriteriaOutcome::Satisfied,
            format_calls: AtomicUsize::new(0),
            criteria_calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn rejecting(name: &'static str, reasons: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name,
            format: Ok(()),
            outcome: CriteriaOutcome::from_reasons(
                reasons.iter().map(|reason| reason.to_string()).collect(),
            ),
            format_calls: AtomicUsize::new(0),
            criteria_calls: AtomicUsize::new(0),
        })
    }

    /// Rejects without giving any reason.
    pub(super) fn silent(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            format: Ok(()),
            outcome: CriteriaOutcome::Rejected {
                reasons: Vec::new(),
            },
            format_calls: AtomicUsize::new(0),
            criteria_calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn malformed(name: &'static str, field: ApplicationField) -> Arc<Self> {
        Arc::new(Self {
            name,
            format: Err(FormatError::NotNumeric {
                field,
                value: "£900".to_string(),
            }),
            outcome: CriteriaOutcome::Satisfied,
            format_calls: AtomicUsize::new(0),
            criteria_calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn format_calls(&self) -> usize {
        self.format_calls.load(Ordering::SeqCst)
    }

    pub(super) fn criteria_calls(&self) -> usize {
        self.criteria_calls.load(Ordering::SeqCst)
    }
}

impl EligibilityRule for StubRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate_format(&self, _application: &LoanApplication) -> Result<(), FormatError> {
        self.format_calls.fetch_add(1, Ordering::SeqCst);
        self.format.clone()
    }

    fn validate_criteria(&self, _application: &LoanApplication) -> CriteriaOutcome {
        self.criteria_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub(super) fn handles(rules: &[&Arc<StubRule>]) -> Vec<RuleHandle> {
    rules
        .iter()
        .map(|rule| Arc::clone(*rule) as RuleHandle)
        .collect()
}

pub(super) fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid evaluation date")
}

/// Standard rules with the age rule pinned to [`evaluation_date`].
pub(super) fn pinned_rules(config: &EligibilityConfig) -> Vec<RuleHandle> {
    standard_rules_as_of(config, evaluation_date())
}

pub(super) fn eligible_application() -> LoanApplication {
    LoanApplication::new("1990-02-20", "50000", "10000", "900")
}
