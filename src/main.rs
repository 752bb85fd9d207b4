use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use beneficiary_roster::{Beneficiary, BeneficiaryRepository, FileSource, RosterConfig};

#[derive(Parser)]
#[command(name = "beneficiary-roster", version, about = "List beneficiaries from a JSON roster")]
struct Cli {
    /// Beneficiary JSON file (overrides config and ROSTER_DATA_FILE)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// TOML config file (default: ./beneficiary-roster.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// One line per beneficiary (default)
    List {
        /// Print the normalized list as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Full details for one beneficiary, numbered from 1
    Show { number: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = RosterConfig::load(cli.config.as_deref())?.override_data_file(cli.file);
    init_tracing(&cfg.log_filter);

    let repo = BeneficiaryRepository::new(FileSource::new(cfg.data_file.clone()));
    let beneficiaries = match repo.get_beneficiaries() {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "could not load beneficiaries");
            return Err(e);
        }
    };

    match cli.command.unwrap_or(Command::List { json: false }) {
        Command::List { json: true } => {
            println!("{}", serde_json::to_string_pretty(&beneficiaries)?);
        }
        Command::List { json: false } => print_list(&beneficiaries),
        Command::Show { number } => print_details(select_beneficiary(&beneficiaries, number)?),
    }

    Ok(())
}

fn init_tracing(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter)),
        )
        .init();
}

/// Pick the `number`-th beneficiary, counting from 1
fn select_beneficiary(beneficiaries: &[Beneficiary], number: usize) -> Result<&Beneficiary> {
    let Some(bene) = number.checked_sub(1).and_then(|i| beneficiaries.get(i)) else {
        bail!(
            "No beneficiary #{} (roster has {})",
            number,
            beneficiaries.len()
        );
    };
    Ok(bene)
}

fn print_list(beneficiaries: &[Beneficiary]) {
    if beneficiaries.is_empty() {
        println!("No beneficiaries.");
        return;
    }

    for (i, bene) in beneficiaries.iter().enumerate() {
        println!("{:>3}. {}", i + 1, bene.summary_line());
    }
}

fn print_details(bene: &Beneficiary) {
    if bene.birth_date().is_none() {
        tracing::warn!(dob = %bene.dob, "date of birth is not a calendar date");
    }

    println!("{}", bene.full_name());
    println!("{}", "━".repeat(bene.full_name().chars().count()));
    println!("{}", bene.details());
}
