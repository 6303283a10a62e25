use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use loan_eligibility::config::AppConfig;
use loan_eligibility::eligibility::{
    standard_rules_as_of, EligibilityReport, LoanApplication, LoanValidationService,
};
use loan_eligibility::error::AppError;
use loan_eligibility::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "loan-eligibility",
    about = "Check a loan application against the configured eligibility rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single loan application
    Evaluate(EvaluateArgs),
    /// Print the effective eligibility thresholds as JSON
    Policy,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Applicant date of birth (YYYY-MM-DD)
    #[arg(long)]
    date_of_birth: String,
    /// Declared annual income
    #[arg(long)]
    annual_income: String,
    /// Requested loan amount
    #[arg(long)]
    loan_amount: String,
    /// Residential monthly expenditure
    #[arg(long)]
    residential_monthly_expenditure: String,
    /// Evaluation date for the age check (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit the verdict as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::Policy => {
            println!("{}", serde_json::to_string_pretty(&config.eligibility)?);
            Ok(())
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        date_of_birth,
        annual_income,
        loan_amount,
        residential_monthly_expenditure,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let application = LoanApplication::new(
        date_of_birth,
        annual_income,
        loan_amount,
        residential_monthly_expenditure,
    );

    let rules = standard_rules_as_of(&config.eligibility, today);
    let mut service = LoanValidationService::new(rules);
    info!(?config.environment, %today, rules = ?service.rules(), "evaluating loan application");
    let report = service.evaluate(&application)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

fn render_report(report: &EligibilityReport) {
    if report.eligible {
        println!("Loan application eligible");
        return;
    }

    println!("Loan application rejected");
    for reason in &report.reasons {
        println!("- {reason}");
    }
}
