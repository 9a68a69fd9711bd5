mod assignment;
mod builder;
mod curry_assignment;
mod error;
mod preference;

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/*
sample input file:
2
1 V 2 M
1 M
*/
#[derive(Parser)]
#[command(name = "curry-mix")]
#[command(about = "Pick veg or meat for every curry so that each customer gets something they ordered")]
struct Cli {
    /// Input file having curry orders (plain text, or JSON when ending in .json)
    #[arg(long)]
    curry_orders: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log intermediate state to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let instance = builder::instance_build(&cli.curry_orders)
        .with_context(|| format!("failed to read curry orders from {}", cli.curry_orders.display()))?;
    let outcome = curry_assignment::process_orders(&instance)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
        OutputFormat::Text => match outcome.curry_mix() {
            Some(curry_mix) => println!("Final solution: {}", curry_mix),
            None => println!("No solution exists"),
        },
    }

    Ok(())
}
