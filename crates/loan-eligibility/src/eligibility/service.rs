use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::application::LoanApplication;
use super::config::EligibilityConfig;
use super::rules::{standard_rules, CriteriaOutcome, RuleHandle};

/// Raised when any rule cannot parse the field it owns. The rule-specific
/// cause is logged and dropped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Loan application invalid")]
pub struct LoanApplicationInvalid;

/// Serializable verdict for entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub eligible: bool,
    pub reasons: Vec<String>,
}

/// Runs an ordered rule set over an application in two phases: a fail-fast
/// format gate, then a criteria pass that collects every rejection reason.
///
/// `validate` takes `&mut self` because the aggregated reasons live on the
/// service; use one instance per concurrent caller.
pub struct LoanValidationService {
    rules: Vec<RuleHandle>,
    errors: Vec<String>,
}

impl LoanValidationService {
    pub fn new(rules: Vec<RuleHandle>) -> Self {
        Self {
            rules,
            errors: Vec::new(),
        }
    }

    pub fn from_config(config: &EligibilityConfig) -> Self {
        Self::new(standard_rules(config))
    }

    /// Rule names in evaluation order.
    pub fn rules(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Rejection reasons from the most recent `validate` call.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns `Ok(true)` when every rule is satisfied and `Ok(false)` when at
    /// least one criterion rejects the application; see [`Self::errors`].
    pub fn validate(
        &mut self,
        application: &LoanApplication,
    ) -> Result<bool, LoanApplicationInvalid> {
        self.errors.clear();

        for rule in &self.rules {
            if let Err(err) = rule.validate_format(application) {
                warn!(
                    rule = rule.name(),
                    field = %err.field(),
                    error = %err,
                    "malformed loan application"
                );
                return Err(LoanApplicationInvalid);
            }
        }

        let outcomes: Vec<(&'static str, CriteriaOutcome)> = self
            .rules
            .iter()
            .map(|rule| {
                let outcome = rule.validate_criteria(application);
                debug!(
                    rule = rule.name(),
                    satisfied = outcome.is_satisfied(),
                    "criteria checked"
                );
                (rule.name(), outcome)
            })
            .collect();

        let eligible = outcomes.iter().all(|(_, outcome)| outcome.is_satisfied());

        // A rejection without reasons still has to surface in `errors`.
        self.errors = outcomes
            .into_iter()
            .flat_map(|(name, outcome)| match outcome {
                CriteriaOutcome::Rejected { reasons } if reasons.is_empty() => {
                    vec![format!("{name} criteria not met")]
                }
                outcome => outcome.into_reasons(),
            })
            .collect();

        info!(
            eligible,
            rejections = self.errors.len(),
            "loan application evaluated"
        );
        Ok(eligible)
    }

    /// Validate and package the verdict with its reasons.
    pub fn evaluate(
        &mut self,
        application: &LoanApplication,
    ) -> Result<EligibilityReport, LoanApplicationInvalid> {
        let eligible = self.validate(application)?;
        Ok(EligibilityReport {
            eligible,
            reasons: self.errors.clone(),
        })
    }
}
