//! mbb ui コマンド

use super::{open, Context};
use crate::error::{MbbError, Result};
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Navigation path to start from (e.g. /app-store/mb-bookings)
    pub path: Option<String>,
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let route = args.path.as_deref().map(open::resolve).transpose()?;
    let data = tui::DataStore::load(&ctx.config)?;
    tui::run(data, route).map_err(MbbError::Terminal)
}
