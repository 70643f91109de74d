use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tally_core::{Category, matching_rule};
use tally_finance::Ledger;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod report;
mod state;

use config::{InitOutcome, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TALLY_BUILD_SHA"), ")"),
    about = "Turn quick-entry money notes into category totals"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse quick-entry lines ("10k dinner", "+20k freelance") and summarize them
    Analyze {
        /// Read input from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Override a category, e.g. --set transaction-3=Shopping (repeatable)
        #[arg(long = "set", value_name = "ID=CATEGORY", value_parser = parse_override)]
        overrides: Vec<(String, Category)>,

        /// Output format (default from config, fallback table)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Currency label printed next to amounts (default from config)
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show which category a description would get and why
    Explain {
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// List every category label
    Categories,

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init {
        /// Overwrite an existing config with the defaults
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Analyze {
            file,
            overrides,
            format,
            currency,
        } => {
            let cfg = config::load_config()?;
            let raw = read_input(file)?;

            let mut ledger = Ledger::from_raw(&raw);
            for (id, category) in overrides {
                if !ledger.recategorize(&id, category) {
                    warn!(%id, %category, "no expense with this id accepts that category; override ignored");
                }
            }

            let snap = ledger.snapshot();
            let currency = currency.unwrap_or(cfg.display.currency);
            let mut out = io::stdout().lock();
            match format.unwrap_or(cfg.output.format) {
                OutputFormat::Table => report::write_table(&mut out, &snap, &currency)?,
                OutputFormat::Json => report::write_json(&mut out, &snap)?,
                OutputFormat::Csv => report::write_csv(&mut out, &snap)?,
            }
        }

        Command::Explain { description } => {
            let description = description.join(" ");
            match matching_rule(&description) {
                Some((category, keyword)) => {
                    println!("{category} (matched \"{keyword}\")");
                }
                None => {
                    println!("{} (no keyword matched)", Category::Other);
                }
            }
            println!("Positive amounts (+) are always {}.", Category::Income);
        }

        Command::Categories => {
            for c in Category::ALL {
                println!("{c}");
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init { force } => match config::init_config(force)? {
                InitOutcome::Written(p) => println!("Wrote {}", p.display()),
                InitOutcome::AlreadyExists(p) => {
                    println!("Config already exists: {} (pass --force to reset)", p.display())
                }
            },
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

// Priority: RUST_LOG > --verbose > warn. Logs go to stderr so stdout stays
// clean for json/csv output.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .init();
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display())),
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).context("read stdin")?;
            Ok(s)
        }
    }
}

fn parse_override(s: &str) -> Result<(String, Category), String> {
    let (id, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=CATEGORY, got '{s}'"))?;
    let category = label.parse::<Category>().map_err(|e| e.to_string())?;
    Ok((id.trim().to_string(), category))
}
