use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{apps, bookings, categories, home, info, open, ui};
use crate::config::ColorMode;

#[derive(Debug, Parser)]
#[command(name = "mbb")]
#[command(about = "MB Business app ecosystem dashboard", long_about = None)]
pub struct Cli {
    /// Show debug logs and detailed error output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize output (overrides display.color in the config file)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Config file (default: ~/.mbb/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dashboard statistics, quick actions and recent activity
    Home(home::Args),

    /// Browse the app store (search and category filter)
    Apps(apps::Args),

    /// List app categories
    Categories(categories::Args),

    /// Show app details
    Info(info::Args),

    /// Manage today's bookings
    Bookings(bookings::Args),

    /// Open a navigation path such as /app-store/mb-bookings
    Open(open::Args),

    /// Interactive dashboard
    Ui(ui::Args),
}

impl Command {
    /// 端末を占有する対話モードか
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Ui(_))
    }
}
