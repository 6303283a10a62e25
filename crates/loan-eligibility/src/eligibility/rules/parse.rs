use chrono::{Datelike, NaiveDate};

use super::super::application::{ApplicationField, LoanApplication};
use super::FormatError;

pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a plain, non-negative decimal amount. Currency symbols, grouping
/// separators and non-finite values are rejected.
pub(super) fn amount(
    application: &LoanApplication,
    field: ApplicationField,
) -> Result<f64, FormatError> {
    let raw = application.field(field);
    let not_numeric = || FormatError::NotNumeric {
        field,
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(not_numeric());
    }

    let value: f64 = trimmed.parse().map_err(|_| not_numeric())?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(not_numeric())
    }
}

pub(super) fn date_of_birth(application: &LoanApplication) -> Result<NaiveDate, FormatError> {
    let raw = &application.date_of_birth;
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| FormatError::DateOfBirth {
        value: raw.clone(),
    })
}

/// Whole years between `born` and `on`; zero when `born` is after `on`.
pub(super) fn age_on(born: NaiveDate, on: NaiveDate) -> u32 {
    if born > on {
        return 0;
    }

    let mut years = on.year() - born.year();
    if (on.month(), on.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
