use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

pub mod apps;
pub mod bookings;
pub mod categories;
pub mod home;
pub mod info;
pub mod open;
pub mod ui;

/// コマンド共通の実行コンテキスト
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: Config,
    /// 標準出力に色を付けるか
    pub color: bool,
}

impl Context {
    /// CLI のグローバルオプションから構築
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let color = cli.color.unwrap_or(config.display.color).enabled();
        Ok(Self { config, color })
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Command::Home(args) => home::run(&ctx, args),
        Command::Apps(args) => apps::run(&ctx, args),
        Command::Categories(args) => categories::run(&ctx, args),
        Command::Info(args) => info::run(&ctx, args),
        Command::Bookings(args) => bookings::run(&ctx, args),
        Command::Open(args) => open::run(&ctx, args),
        Command::Ui(args) => ui::run(&ctx, args),
    }
}
