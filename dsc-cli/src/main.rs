//! Data Structure Calculator (dsc) - Main entry point
//!
//! Without a subcommand, starts the interactive menu. `dsc run` applies a
//! list of textual commands to one session; `dsc calc` evaluates a single
//! two-number expression.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dsc_cli::run::run_commands;
use dsc_cli::{Renderer, SessionController};
use dsc_common::{logging, ConfigResolver};
use dsc_engine::{ArrayEngine, ListEngine, Operator, QueueEngine, Structure, ValueStore};
use tracing::{debug, info};

/// Command-line arguments for dsc
#[derive(Parser, Debug)]
#[command(name = "dsc")]
#[command(about = "Array, list and queue calculator over a set of numbers")]
#[command(version)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Initial numbers, comma separated (overrides the config file)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, global = true)]
    values: Option<Vec<f64>>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run commands against one session, e.g. `dsc run -s queue "rotate -1" display`
    Run {
        /// Data structure to operate on (array, list, queue)
        #[arg(short, long)]
        structure: Structure,

        /// Print one JSON object per command instead of text
        #[arg(long)]
        json: bool,

        /// Commands, each quoted if it takes arguments
        #[arg(required = true, allow_hyphen_values = true)]
        commands: Vec<String>,
    },

    /// Evaluate one two-number expression, e.g. `dsc calc 6 / 4`
    #[command(allow_negative_numbers = true)]
    Calc {
        lhs: f64,
        /// One of + - * / (or add, sub, mul, div)
        operator: Operator,
        rhs: f64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let resolver = ConfigResolver::new(args.config.clone());
    let (mut config, source) = resolver
        .resolve()
        .context("Failed to load configuration")?;

    if let Some(values) = args.values {
        config.values = values;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate().context("Invalid configuration")?;

    logging::init(&config.logging.level).context("Failed to initialise logging")?;

    source.log();

    let renderer = Renderer::new(config.display.average_decimals);

    match args.command {
        None => {
            info!("Starting interactive session with {} initial values", config.values.len());
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut controller = SessionController::new(
                stdin.lock(),
                stdout.lock(),
                ValueStore::from_values(config.values),
                renderer,
            );
            controller.run().context("Interactive session failed")?;
        }

        Some(Command::Run {
            structure,
            json,
            commands,
        }) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let values = config.values;
            let failures = match structure {
                Structure::Array => {
                    run_commands::<ArrayEngine, _>(values, &commands, json, &renderer, &mut out)?
                }
                Structure::List => {
                    run_commands::<ListEngine, _>(values, &commands, json, &renderer, &mut out)?
                }
                Structure::Queue => {
                    run_commands::<QueueEngine, _>(values, &commands, json, &renderer, &mut out)?
                }
            };
            debug!("{} command(s) reported errors", failures);
        }

        Some(Command::Calc { lhs, operator, rhs }) => {
            let calc = operator
                .apply(lhs, rhs)
                .with_context(|| format!("Cannot evaluate {} {} {}", lhs, operator.symbol(), rhs))?;
            println!("{}", renderer.calculation(&calc));
        }
    }

    Ok(())
}
