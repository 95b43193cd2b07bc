//! mbb open コマンド
//!
//! ナビゲーションパスを画面に解決し、対応するコマンドで表示する。

use super::{apps, bookings, home, info, Context};
use crate::error::{MbbError, Result};
use crate::route::Route;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Navigation path (/, /app-store, /app-store/<APP_ID>, /apps/bookings)
    pub path: String,
}

/// パスを解決（未知のパスはエラー）
pub fn resolve(path: &str) -> Result<Route> {
    Route::parse(path).ok_or_else(|| MbbError::UnknownRoute(path.to_string()))
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let route = resolve(&args.path)?;
    tracing::debug!(%route, view = route.title(), "route resolved");

    match route {
        Route::Home => home::run(ctx, home::Args::default()),
        Route::AppStore => apps::run(ctx, apps::Args::default()),
        Route::AppDetail { app_id } => info::run(ctx, info::Args::new(app_id)),
        Route::Bookings => bookings::run(ctx, bookings::Args::default()),
    }
}

#[cfg(test)]
#[path = "open_test.rs"]
mod tests;
