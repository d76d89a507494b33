//! Syllabi CLI - Draft syllabi through a permission-gated wizard and review them

use clap::Parser;
use syllabi::cli::{Cli, Commands};
use syllabi::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> syllabi::Result<()> {
    match cli.command {
        Some(Commands::Init { force }) => {
            syllabi::cli::commands::init::run(cli.cwd.as_deref(), force, cli.dry_run).await
        }
        Some(Commands::Steps { user, json }) => {
            syllabi::cli::commands::steps::run(cli.cwd.as_deref(), &user, json).await
        }
        Some(Commands::Walk { user, syllabus }) => {
            syllabi::cli::commands::walk::run(cli.cwd.as_deref(), &user, &syllabus, cli.dry_run)
                .await
        }
        Some(Commands::Review { action }) => {
            syllabi::cli::commands::review::run(cli.cwd.as_deref(), &action, cli.dry_run).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
