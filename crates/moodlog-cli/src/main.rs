use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use moodlog_core::{Config, ConfigError};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "moodlog-cli", version, about = "Moodlog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mood statistics for a journal export
    Stats(commands::SourceArgs),
    /// Normalized entry history, newest first
    History(commands::SourceArgs),
    /// Print a sample week of entries
    Demo(commands::demo::DemoArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(config: Option<&Config>) {
    let filter = EnvFilter::try_from_env("MOODLOG_LOG").unwrap_or_else(|_| {
        let configured = config.map_or("warn", |cfg| cfg.logging.filter.as_str());
        EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(
    command: Commands,
    config: Result<Config, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Stats(args) => commands::stats::run(args, &config?),
        Commands::History(args) => commands::history::run(args, &config?),
        Commands::Demo(args) => commands::demo::run(args, &config?),
        Commands::Config { action } => commands::config::run(action, config),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "moodlog-cli", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    init_tracing(config.as_ref().ok());

    if let Err(e) = run(cli.command, config) {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
