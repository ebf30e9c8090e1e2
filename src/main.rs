//! Loan Default Risk CLI
//!
//! Command-line front-end for the loan default risk scorer. Collects
//! borrower details as raw form values, scores them against the active
//! coefficient table and prints the verdict.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};

use loan_default_risk::utils::{load_config, setup_logging, Config, OutputConfig};
use loan_default_risk::{score, BorrowerProfile, PredictionResult, RiskLabel};

#[derive(Parser)]
#[command(name = "loan-risk")]
#[command(about = "Loan default risk prediction")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single borrower
    Score {
        /// Monthly income
        #[arg(short, long)]
        income: String,

        /// Employment status (Salaried, Self Employed, Unemployed)
        #[arg(short, long, default_value = "Salaried")]
        employment: String,

        /// Location (Urban, Rural)
        #[arg(short, long, default_value = "Urban")]
        location: String,

        /// Loan type (Home, Personal, Car)
        #[arg(short = 't', long, default_value = "Home")]
        loan_type: String,

        /// Credit rating (Good, Bad)
        #[arg(short, long, default_value = "Good")]
        rating: String,
    },

    /// Print the active coefficient table
    Summary,

    /// Generate sample configuration file
    Config {
        /// Output path
        #[arg(short, long, default_value = "config.toml")]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(if cli.verbose { "debug" } else { "info" })?;

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Score {
            income,
            employment,
            location,
            loan_type,
            rating,
        } => {
            let table = config.coefficient_table()?;
            debug!("Using coefficient table '{}'", table.version);

            let profile =
                BorrowerProfile::from_form(&income, &employment, &location, &loan_type, &rating)?;
            let result = score(&profile, &table)?;

            info!(
                "Scored borrower with table '{}': p={:.6}",
                table.version, result.probability
            );
            print_result(&result, &config.output);
        }

        Commands::Summary => {
            let table = config.coefficient_table()?;
            println!("{}", table.summary());
        }

        Commands::Config { output } => {
            Config::create_sample_config(&output)?;
            println!("Sample configuration written to {}", output);
        }
    }

    Ok(())
}

fn print_result(result: &PredictionResult, output: &OutputConfig) {
    println!("\nPrediction Result");
    println!("═══════════════════════════════════════\n");
    println!(
        "Predicted probability of default: {:.*}%",
        output.decimals,
        result.probability * 100.0
    );

    let verdict = match result.label {
        RiskLabel::Risky => "High risk of default detected.",
        RiskLabel::NotRisky => "Low risk borrower.",
    };

    if output.color {
        let line = if result.label.is_risky() {
            verdict.red().bold()
        } else {
            verdict.green().bold()
        };
        println!("{}", line);
    } else {
        println!("{}", verdict);
    }
}
