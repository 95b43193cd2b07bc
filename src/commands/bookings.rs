//! mbb bookings コマンド
//!
//! 予約一覧を表示する。絞り込みはアプリ一覧と同じフィルタを使い、
//! ステータスをカテゴリ、メモを説明文として扱う。

use super::Context;
use crate::catalog::{seed, Booking, BookingCatalog, BookingStatus};
use crate::config;
use crate::error::{MbbError, Result};
use crate::filter::{CategorySelector, FilterCriteria};
use crate::output;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Default, Parser)]
pub struct Args {
    /// Case-insensitive text matched against client name and notes
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Only bookings with this status
    #[arg(long, short = 's', value_enum)]
    pub status: Option<BookingStatus>,

    /// Selected date (YYYY-MM-DD, default: bookings.default_date)
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// 引数からフィルタ条件を構築
    pub fn criteria(&self) -> FilterCriteria {
        let category = match self.status {
            Some(status) => CategorySelector::Only(status.as_str().to_string()),
            None => CategorySelector::All,
        };
        FilterCriteria::default()
            .with_query(self.query.as_str())
            .with_category(category)
    }

    /// 選択日（未指定なら設定のデフォルト）
    pub fn selected_date(&self, ctx: &Context) -> Result<NaiveDate> {
        match &self.date {
            Some(raw) => config::parse_date(raw).map_err(MbbError::InvalidArgument),
            None => ctx.config.default_date(),
        }
    }
}

/// JSON 出力
#[derive(Debug, Serialize)]
struct Schedule<'a> {
    date: NaiveDate,
    bookings: Vec<&'a Booking>,
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let date = args.selected_date(ctx)?;
    let catalog = BookingCatalog::seeded()?;
    let filtered = catalog.filter(&args.criteria());
    tracing::debug!(%date, matched = filtered.len(), "bookings filtered");

    if args.json {
        let schedule = Schedule {
            date,
            bookings: filtered,
        };
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print!("{}", render(&catalog, &filtered, date, ctx.color));
    }

    Ok(())
}

pub(crate) fn render(
    catalog: &BookingCatalog,
    filtered: &[&Booking],
    date: NaiveDate,
    color: bool,
) -> String {
    let mut out = String::new();
    out.push_str("MB Bookings\n===========\n\n");

    let mut stats = output::table(vec!["Metric", "Value"]);
    for stat in seed::booking_stats() {
        stats.add_row(vec![
            stat.label.to_string(),
            output::paint(stat.value, stat.tone, color),
        ]);
    }
    out.push_str(&format!("{stats}\n\n"));

    out.push_str(&output::section(&output::schedule_heading(date, filtered.len())));
    out.push('\n');

    if filtered.is_empty() {
        if catalog.is_empty() {
            out.push_str("No bookings scheduled\n");
        } else {
            out.push_str("No bookings matched\n");
        }
    } else {
        let mut table = output::table(vec![
            "Time", "Client", "Service", "Duration", "Status", "Phone", "Email", "Notes",
        ]);
        for booking in filtered {
            table.add_row(vec![
                booking.time.clone(),
                booking.client.clone(),
                booking.service.clone(),
                booking.duration.clone(),
                output::status_badge(booking.status, color),
                booking.phone.clone(),
                booking.email.clone(),
                booking.notes.clone(),
            ]);
        }
        out.push_str(&format!("{table}\n"));
    }
    out.push('\n');

    out.push_str(&output::section("Upcoming"));
    out.push('\n');
    for entry in seed::upcoming() {
        out.push_str(&format!(
            "  {} {}  ({})\n",
            output::paint("●", entry.tone, color),
            entry.title,
            entry.when
        ));
    }
    out
}

#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;
