//! swapper CLI
//!
//! ## Usage
//!
//! ```bash
//! # sum 1..=n with every strategy
//! swapper sum 10 --strategy all
//!
//! # list the currencies in the price table
//! swapper currencies
//!
//! # convert with a custom price table
//! swapper --prices prices.json convert 100 USD ETH
//!
//! # fill the form and confirm a mock swap
//! swapper swap --sell-amount 100 --sell USD --earn ATOM --seed 7
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use sum_to_n::Strategy;
use swapper::{Exchange, MockExchange, PriceTable, SwapDesk, SwapOutcome, Swapper, TracingNotifier};

#[derive(Parser)]
#[command(name = "swapper")]
#[command(about = "sum-to-n and currency swap exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON price table ([{"currency": "USD", "price": 1}, ...]); built-in table if unset
    #[arg(long, global = true, env = "SWAPPER_PRICES")]
    prices: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the integers 1..=N
    Sum {
        /// Whole, non-negative number (parsed as JSON, so "\"3\"" is a string).
        /// The iterative and fold strategies accept at most 2^32
        #[arg(allow_hyphen_values = true)]
        n: String,

        #[arg(short, long, value_enum, default_value_t = StrategyArg::ClosedForm)]
        strategy: StrategyArg,
    },

    /// List currencies in the price table
    Currencies,

    /// Convert an amount between two currencies
    Convert {
        amount: f64,
        from: String,
        to: String,
    },

    /// Fill the swap form and confirm a mock swap
    Swap {
        /// Amount to sell
        #[arg(long, conflicts_with = "earn_amount")]
        sell_amount: Option<f64>,

        /// Amount to earn
        #[arg(long)]
        earn_amount: Option<f64>,

        /// Currency to sell
        #[arg(long)]
        sell: Option<String>,

        /// Currency to earn
        #[arg(long)]
        earn: Option<String>,

        /// Switch sides before confirming
        #[arg(long)]
        switch: bool,

        /// Seed for the mock exchange (random if unset)
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated network latency (ms)
        #[arg(long, default_value_t = 2000)]
        delay_ms: u64,

        /// Only print the form state, do not confirm
        #[arg(long)]
        dry_run: bool,
    },
}

/// largest n the O(n) strategies are run for
const MAX_LINEAR_N: u64 = 1 << 32;

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Iterative,
    ClosedForm,
    Fold,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Iterative => vec![Strategy::Iterative],
            StrategyArg::ClosedForm => vec![Strategy::ClosedForm],
            StrategyArg::Fold => vec![Strategy::Fold],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("swapper={}", level).into()),
        )
        .init();

    match cli.command {
        Commands::Sum { n, strategy } => run_sum(&n, strategy),
        Commands::Currencies => run_currencies(&load_table(cli.prices)?),
        Commands::Convert { amount, from, to } => {
            run_convert(&load_table(cli.prices)?, amount, &from, &to)
        }
        Commands::Swap {
            sell_amount,
            earn_amount,
            sell,
            earn,
            switch,
            seed,
            delay_ms,
            dry_run,
        } => {
            let table = Arc::new(load_table(cli.prices)?);
            let mut swapper = Swapper::new(table)?;

            if let Some(currency) = sell {
                swapper.edit_sell_currency(currency)?;
            }
            if let Some(currency) = earn {
                swapper.edit_earn_currency(currency)?;
            }
            if let Some(amount) = sell_amount {
                swapper.edit_sell_amount(amount)?;
            }
            if let Some(amount) = earn_amount {
                swapper.edit_earn_amount(amount)?;
            }
            if switch {
                swapper.switch_currencies();
            }

            println!("{}", swapper.state());
            if dry_run {
                return Ok(());
            }

            let delay = Duration::from_millis(delay_ms);
            match seed {
                Some(seed) => {
                    run_swap(&swapper, MockExchange::seeded(seed).with_delay(delay)).await
                }
                None => run_swap(&swapper, MockExchange::from_entropy().with_delay(delay)).await,
            }
        }
    }
}

fn load_table(path: Option<PathBuf>) -> Result<PriceTable> {
    match path {
        Some(path) => {
            info!("price table: {}", path.display());
            PriceTable::load(&path)
                .with_context(|| format!("failed to load price table {}", path.display()))
        }
        None => Ok(PriceTable::builtin()),
    }
}

fn run_sum(n: &str, strategy: StrategyArg) -> Result<()> {
    let n = sum_to_n::parse(n)?;
    let strategies = strategy.strategies();
    check_linear_limit(n, &strategies)?;
    for strategy in strategies {
        println!("{}: {}", strategy, strategy.sum(n));
    }
    Ok(())
}

fn check_linear_limit(n: u64, strategies: &[Strategy]) -> Result<()> {
    let linear = strategies.iter().any(|s| *s != Strategy::ClosedForm);
    if linear && n > MAX_LINEAR_N {
        anyhow::bail!(
            "n = {} exceeds {} for an O(n) strategy; use --strategy closed-form",
            n,
            MAX_LINEAR_N
        );
    }
    Ok(())
}

fn run_currencies(table: &PriceTable) -> Result<()> {
    for entry in table.entries() {
        println!("{:<10} {}", entry.currency, entry.price);
    }
    Ok(())
}

fn run_convert(table: &PriceTable, amount: f64, from: &str, to: &str) -> Result<()> {
    let converted = swapper::convert(table, amount, from, to)?;
    println!("{} {} = {} {}", amount, from, converted, to);
    Ok(())
}

async fn run_swap<E: Exchange>(swapper: &Swapper, exchange: E) -> Result<()> {
    let desk = SwapDesk::new(exchange, TracingNotifier::new());
    let outcome = desk.confirm(swapper.state()).await?;
    println!("{}", serde_json::to_string_pretty(&outcome_json(swapper, &outcome)?)?);
    Ok(())
}

fn outcome_json(swapper: &Swapper, outcome: &SwapOutcome) -> Result<serde_json::Value> {
    let state = serde_json::to_value(swapper.state())?;
    Ok(match outcome {
        SwapOutcome::Completed => serde_json::json!({ "status": "completed", "swap": state }),
        SwapOutcome::Failed { message } => {
            serde_json::json!({ "status": "failed", "message": message, "swap": state })
        }
    })
}
