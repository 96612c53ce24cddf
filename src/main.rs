use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use owo_colors::OwoColorize;

use lectern::commands::{
    ExploreOptions, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_explore,
};
use lectern::error::{LecternError, Result};
use lectern::explore::{Category, Department, EventType, Level, SortOrder, Tab, Timeframe};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Terminal explorer for an e-learning marketplace catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one explore query and print the results
    #[command(visible_alias = "e")]
    Explore {
        /// Listing domain: courses or events
        #[arg(short = 't', long, default_value = "courses")]
        tab: Tab,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Subject category
        #[arg(long)]
        category: Option<Category>,

        /// Course level (courses only)
        #[arg(long)]
        level: Option<Level>,

        /// Hosting department
        #[arg(long)]
        department: Option<Department>,

        /// Event format (events only)
        #[arg(long = "event-type")]
        event_type: Option<EventType>,

        /// Event scheduling window
        #[arg(long)]
        timeframe: Option<Timeframe>,

        /// Result ordering
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Page number
        #[arg(short, long)]
        page: Option<u32>,

        /// Page size (defaults to the configured value)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Seed the whole query from a shared /explore address
        /// (overrides the individual filter flags)
        #[arg(short, long)]
        address: Option<String>,

        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Browse the catalog interactively
    #[command(visible_alias = "b")]
    Browse {
        /// Seed the view from a shared /explore address
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show,
    /// Print one configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
}

/// Run an async command on a fresh runtime; `main` stays synchronous so TUI
/// commands can own their runtime.
fn run_async<F>(future: F) -> Result<()>
where
    F: std::future::Future<Output = Result<()>>,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| LecternError::Other(format!("Failed to create runtime: {e}")))?;
    rt.block_on(future)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explore {
            tab,
            search,
            category,
            level,
            department,
            event_type,
            timeframe,
            sort,
            page,
            limit,
            address,
            json,
        } => run_async(cmd_explore(ExploreOptions {
            tab,
            search,
            category,
            level,
            department,
            event_type,
            timeframe,
            sort,
            page,
            limit,
            address,
            json,
        })),

        Commands::Browse { address } => cmd_browse(address.as_deref()),

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
