use serde::{Deserialize, Serialize};

pub const DEFAULT_MINIMUM_AGE: u32 = 25;
pub const DEFAULT_MINIMUM_ANNUAL_INCOME: f64 = 25_000.0;
pub const DEFAULT_MAX_LOAN_TO_INCOME_PERCENT: f64 = 20.0;
pub const DEFAULT_MAX_MONTHLY_EXPENDITURE: f64 = 1_000.0;

/// Thresholds backing the standard eligibility rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_age: u32,
    pub minimum_annual_income: f64,
    pub max_loan_to_income_percent: f64,
    pub loan_ceiling: LoanCeiling,
    pub max_monthly_expenditure: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_age: DEFAULT_MINIMUM_AGE,
            minimum_annual_income: DEFAULT_MINIMUM_ANNUAL_INCOME,
            max_loan_to_income_percent: DEFAULT_MAX_LOAN_TO_INCOME_PERCENT,
            loan_ceiling: LoanCeiling::default(),
            max_monthly_expenditure: DEFAULT_MAX_MONTHLY_EXPENDITURE,
        }
    }
}

/// Whether a loan exactly at the income cap is still acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanCeiling {
    /// `loan <= cap`
    #[default]
    Inclusive,
    /// `loan < cap`
    Exclusive,
}

impl LoanCeiling {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inclusive" | "le" | "<=" => Some(Self::Inclusive),
            "exclusive" | "lt" | "<" => Some(Self::Exclusive),
            _ => None,
        }
    }

    pub fn permits(self, amount: f64, cap: f64) -> bool {
        match self {
            LoanCeiling::Inclusive => amount <= cap,
            LoanCeiling::Exclusive => amount < cap,
        }
    }
}
