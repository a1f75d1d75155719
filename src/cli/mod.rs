pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::utils::{
    dir::create_application_default_path,
    logging::{enable_logging, CLI_PREFIX},
};

use commands::{
    process_add, process_clear, process_list, process_month, process_remove, process_stats,
    process_toggle, process_week, DaySelection,
};

#[derive(Parser, Debug)]
#[command(name = "Habitrack", version, long_about = None)]
#[command(about = "Command line tracker for daily habits", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Add a new habit")]
    Add {
        #[arg(help = "Display name of the habit")]
        name: String,
        #[arg(long, help = "Display glyph of the habit. Defaults to ✨")]
        emoji: Option<String>,
    },
    #[command(about = "Toggle a habit's completion for a day")]
    Toggle {
        #[arg(help = "Id of the habit, as shown by list")]
        id: i64,
        #[command(flatten)]
        day: DaySelection,
    },
    #[command(about = "Remove a habit")]
    Remove {
        #[arg(help = "Id of the habit, as shown by list")]
        id: i64,
    },
    #[command(about = "List habits with their progress for the current month")]
    List {},
    #[command(about = "Display a month as a habit/day table")]
    Month {
        #[arg(long, help = "Month to display as YYYY-MM. Defaults to the current month")]
        month: Option<String>,
    },
    #[command(about = "Display a week of day cards")]
    Week {
        #[command(flatten)]
        day: DaySelection,
        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Weeks to shift relative to the chosen day, for example -1 for the previous week"
        )]
        offset: i64,
    },
    #[command(about = "Display statistics for a month")]
    Stats {
        #[arg(long, help = "Month to display as YYYY-MM. Defaults to the current month")]
        month: Option<String>,
    },
    #[command(about = "Delete all stored habit data")]
    Clear {},
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = match args.dir {
        Some(dir) => dir,
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    match args.commands {
        Commands::Add { name, emoji } => process_add(app_dir, &name, emoji.as_deref()).await,
        Commands::Toggle { id, day } => process_toggle(app_dir, id, day).await,
        Commands::Remove { id } => process_remove(app_dir, id).await,
        Commands::List {} => process_list(app_dir).await,
        Commands::Month { month } => process_month(app_dir, month).await,
        Commands::Week { day, offset } => process_week(app_dir, day, offset).await,
        Commands::Stats { month } => process_stats(app_dir, month).await,
        Commands::Clear {} => process_clear(app_dir).await,
    }
}
