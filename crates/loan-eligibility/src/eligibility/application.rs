use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw loan request exactly as the caller supplied it. Nothing is parsed
/// or checked on construction; each rule interprets the fields it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub date_of_birth: String,
    pub annual_income: String,
    pub loan_amount: String,
    pub residential_monthly_expenditure: String,
}

impl LoanApplication {
    pub fn new(
        date_of_birth: impl Into<String>,
        annual_income: impl Into<String>,
        loan_amount: impl Into<String>,
        residential_monthly_expenditure: impl Into<String>,
    ) -> Self {
        Self {
            date_of_birth: date_of_birth.into(),
            annual_income: annual_income.into(),
            loan_amount: loan_amount.into(),
            residential_monthly_expenditure: residential_monthly_expenditure.into(),
        }
    }

    pub fn field(&self, field: ApplicationField) -> &str {
        match field {
            ApplicationField::DateOfBirth => &self.date_of_birth,
            ApplicationField::AnnualIncome => &self.annual_income,
            ApplicationField::LoanAmount => &self.loan_amount,
            ApplicationField::ResidentialMonthlyExpenditure => {
                &self.residential_monthly_expenditure
            }
        }
    }
}

/// Names one of the four raw fields on a [`LoanApplication`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationField {
    DateOfBirth,
    AnnualIncome,
    LoanAmount,
    ResidentialMonthlyExpenditure,
}

impl ApplicationField {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationField::DateOfBirth => "Date of birth",
            ApplicationField::AnnualIncome => "Annual income",
            ApplicationField::LoanAmount => "Loan amount",
            ApplicationField::ResidentialMonthlyExpenditure => "Residential monthly expenditure",
        }
    }
}

impl fmt::Display for ApplicationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
