mod commands;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_router::TableVersion;
use tracing::Level;

use crate::source::TableSource;

#[derive(Parser)]
#[command(name = "recipe-routes")]
#[command(version, about = "Inspect the recipe app's route tables", long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List route entries in matching order
    List {
        #[command(flatten)]
        source: TableSource,
    },

    /// Resolve one or more paths against a table
    Resolve {
        /// Paths to resolve, e.g. /recipe/42
        #[arg(required = true)]
        paths: Vec<String>,

        /// Treat the paths as consecutive navigations and report render actions
        #[arg(short, long)]
        navigate: bool,

        #[command(flatten)]
        source: TableSource,
    },

    /// Print a built-in table as routes.toml
    Export {
        /// Table version: initial, paginated or folders
        #[arg(short, long, default_value_t = TableVersion::latest())]
        preset: TableVersion,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { source } => {
            commands::list::execute(&source)?;
        }
        Commands::Resolve {
            paths,
            navigate,
            source,
        } => {
            commands::resolve::execute(&source, &paths, navigate)?;
        }
        Commands::Export { preset } => {
            commands::export::execute(preset)?;
        }
    }

    Ok(())
}
