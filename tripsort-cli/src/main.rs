use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tripsort_core::{PatternSet, RawRecord, RuleSet};
use tripsort_engine::{analyze, analyze_bulk, render_report};

#[derive(Parser, Debug)]
#[command(name = "tripsort", version, about = "Travel-expense trip detection and categorization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Categorize transactions and infer business purposes
    Analyze {
        /// JSON file containing an array of {date, description, amount, location?} records
        input: PathBuf,

        /// Treat the whole input as multiple trips split on date gaps
        #[arg(long)]
        bulk: bool,

        /// Bulk mode: drop records before this date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Bulk mode: drop records after this date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Max days between transactions in the same trip
        #[arg(long)]
        gap_days: Option<i64>,

        /// Write the text report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { input, bulk, start_date, end_date, gap_days, output } => {
            if !input.exists() {
                bail!("input not found: {}", input.display());
            }

            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let records: Vec<RawRecord> = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", input.display()))?;

            let rules = RuleSet::standard();
            let patterns = PatternSet::standard();

            let report_text = if bulk {
                let report = analyze_bulk(
                    &records,
                    &rules,
                    &patterns,
                    start_date.as_deref(),
                    end_date.as_deref(),
                    gap_days,
                );
                render_report(&report)
            } else {
                let report = analyze(&records, &rules, &patterns);
                serde_json::to_string_pretty(&report).context("serializing report")?
            };

            match output {
                Some(path) => {
                    fs::write(&path, &report_text)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{report_text}"),
            }
        }
    }

    Ok(())
}
