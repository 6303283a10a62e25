use std::env;
use std::fmt;

use crate::eligibility::config::{
    EligibilityConfig, LoanCeiling, DEFAULT_MAX_LOAN_TO_INCOME_PERCENT,
    DEFAULT_MAX_MONTHLY_EXPENDITURE, DEFAULT_MINIMUM_AGE, DEFAULT_MINIMUM_ANNUAL_INCOME,
};

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub eligibility: EligibilityConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let loan_ceiling = match env::var("LOAN_CEILING") {
            Ok(raw) => LoanCeiling::parse(&raw).ok_or(ConfigError::InvalidLoanCeiling(raw))?,
            Err(_) => LoanCeiling::default(),
        };

        let eligibility = EligibilityConfig {
            minimum_age: match env::var("LOAN_MIN_AGE") {
                Ok(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidMinimumAge)?,
                Err(_) => DEFAULT_MINIMUM_AGE,
            },
            minimum_annual_income: amount_var(
                "LOAN_MIN_ANNUAL_INCOME",
                DEFAULT_MINIMUM_ANNUAL_INCOME,
            )?,
            max_loan_to_income_percent: amount_var(
                "LOAN_MAX_INCOME_PERCENT",
                DEFAULT_MAX_LOAN_TO_INCOME_PERCENT,
            )?,
            loan_ceiling,
            max_monthly_expenditure: amount_var(
                "LOAN_MAX_MONTHLY_EXPENDITURE",
                DEFAULT_MAX_MONTHLY_EXPENDITURE,
            )?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            eligibility,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn amount_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidAmount { name, value: raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinimumAge,
    InvalidAmount { name: &'static str, value: String },
    InvalidLoanCeiling(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinimumAge => write!(f, "LOAN_MIN_AGE must be a valid u32"),
            ConfigError::InvalidAmount { name, value } => {
                write!(f, "{name} must be a non-negative number (found '{value}')")
            }
            ConfigError::InvalidLoanCeiling(value) => write!(
                f,
                "LOAN_CEILING must be 'inclusive' or 'exclusive' (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
