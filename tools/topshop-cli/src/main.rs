//! TOP Shopping - a terminal storefront backed by the FakeStore catalog API.
//!
//! Commands:
//! - `topshop home` - Show the landing page
//! - `topshop shop` - List the catalog
//! - `topshop session` - Browse, fill a cart and check out interactively
//! - `topshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod pages;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ConfigArgs, ShopArgs};
use output::Output;

/// TOP Shopping - browse products and fill a cart from the terminal
#[derive(Parser)]
#[command(name = "topshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page
    Home,

    /// List products from the catalog
    Shop(ShopArgs),

    /// Start an interactive shopping session
    Session,

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose {
        "topshop=debug,topshop_data=debug,topshop_commerce=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    let output = Output::new(cli.verbose, cli.json);

    if let Err(e) = run(cli, output.clone()).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Load the context and dispatch. Every failure, config loading included,
/// comes back here so `main` reports it the same way.
async fn run(cli: Cli, output: Output) -> Result<()> {
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    match cli.command {
        Commands::Home => commands::home::run(&ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Session => commands::session::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    }
}
