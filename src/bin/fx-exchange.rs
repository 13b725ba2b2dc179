//! fx-exchange CLI - interactive console currency conversion
//!
//! Prompts for a currency pair and an amount, converts through the anchor
//! currency and prints the result, repeating until the user quits.
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert with the built-in rate table
//! fx-exchange
//!
//! # Convert with rates from a configuration file
//! fx-exchange --config rates.toml
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use log::{info, LevelFilter};

use fx_exchange::config::ExchangeRateConfig;
use fx_exchange::console::{Console, StdConsole};
use fx_exchange::error::Result;
use fx_exchange::exchange::ExchangeService;
use fx_exchange::rates::{RateProvider, StaticRateProvider};
use fx_exchange::ui::{ConsoleUi, UserInterface};

/// fx-exchange: console currency conversion against a fixed rate table
#[derive(Parser)]
#[command(name = "fx-exchange")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive console currency converter", long_about = None)]
struct Cli {
    /// Exchange-rate configuration file (TOML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut builder = Builder::new();
    builder.filter_level(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    builder.parse_default_env();
    builder.init();

    if cli.verbose {
        println!(
            "{} v{}",
            "fx-exchange".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ExchangeRateConfig::load(cli.config.as_deref())?;
    let rates = StaticRateProvider::from_config(&config)?;
    info!(
        "rate table ready with {} currencies",
        rates.supported_currencies().len()
    );

    let ui = ConsoleUi::new(&rates, StdConsole::new());
    let mut service = ExchangeService::new(&rates, ui);
    run_loop(&mut service, &mut StdConsole::new())
}

/// Repeat conversions until a `q` line or end of input. A failed iteration
/// reports the problem and carries on; it never ends the session.
fn run_loop<U, C>(service: &mut ExchangeService<'_, U>, console: &mut C) -> Result<()>
where
    U: UserInterface,
    C: Console,
{
    loop {
        if let Err(e) = service.process_currency_exchange() {
            console.write_line(&format!("Error: {}", e))?;
            console.write_line("Please try again.")?;
        }

        console.write_line("Press Enter to continue or 'Q' to quit.")?;
        match console.read_line()? {
            None => break,
            Some(line) if line.trim().eq_ignore_ascii_case("q") => break,
            Some(_) => {}
        }
    }

    info!("session ended");
    Ok(())
}
