use tracing::debug;

use super::super::application::{ApplicationField, LoanApplication};
use super::parse;
use super::{CriteriaOutcome, EligibilityRule, FormatError};

/// Residential monthly expenditure must stay strictly below a ceiling.
#[derive(Debug, Clone)]
pub struct ExpenditureRule {
    ceiling: f64,
}

impl ExpenditureRule {
    pub fn new(ceiling: f64) -> Self {
        Self { ceiling }
    }
}

impl EligibilityRule for ExpenditureRule {
    fn name(&self) -> &'static str {
        "residential_monthly_expenditure"
    }

    fn validate_format(&self, application: &LoanApplication) -> Result<(), FormatError> {
        parse::amount(application, ApplicationField::ResidentialMonthlyExpenditure).map(|_| ())
    }

    fn validate_criteria(&self, application: &LoanApplication) -> CriteriaOutcome {
        let spend = match parse::amount(application, ApplicationField::ResidentialMonthlyExpenditure)
        {
            Ok(value) => value,
            Err(err) => return CriteriaOutcome::rejected(err.to_string()),
        };
        debug!(spend, ceiling = self.ceiling, "expenditure criterion evaluated");

        if spend < self.ceiling {
            CriteriaOutcome::Satisfied
        } else {
            CriteriaOutcome::rejected(format!(
                "Residential monthly expenditure must be less than {}",
                self.ceiling
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spending(expenditure: &str) -> LoanApplication {
        LoanApplication::new("2005-02-20", "50000", "10000", expenditure)
    }

    #[test]
    fn accepts_expenditure_under_ceiling() {
        let rule = ExpenditureRule::new(1_000.0);

        assert!(rule.validate_criteria(&spending("900")).is_satisfied());
    }

    #[test]
    fn rejects_expenditure_over_ceiling() {
        let rule = ExpenditureRule::new(1_000.0);

        let outcome = rule.validate_criteria(&spending("1100"));

        assert!(!outcome.is_satisfied());
        assert!(outcome.reasons()[0].contains("1000"));
    }

    #[test]
    fn ceiling_itself_is_rejected() {
        let rule = ExpenditureRule::new(1_000.0);

        assert!(!rule.validate_criteria(&spending("1000")).is_satisfied());
    }

    #[test]
    fn format_rejects_currency_symbol() {
        let rule = ExpenditureRule::new(1_000.0);

        let err = rule
            .validate_format(&spending("£900"))
            .expect_err("currency symbol rejected");
        assert_eq!(
            err.to_string(),
            "Residential monthly expenditure must be a numeric value"
        );
    }
}
