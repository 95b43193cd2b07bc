//! mbb home コマンド
//!
//! ダッシュボードの統計・クイックアクション・最近のアクティビティを表示する。

use super::Context;
use crate::catalog::{seed, ActivityEntry, QuickAction, Stat};
use crate::error::Result;
use crate::output;
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Default, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// ダッシュボードの表示内容
#[derive(Debug, Serialize)]
struct Dashboard {
    stats: Vec<Stat>,
    quick_actions: Vec<QuickAction>,
    recent_activity: Vec<ActivityEntry>,
}

impl Dashboard {
    fn seeded() -> Self {
        Self {
            stats: seed::home_stats(),
            quick_actions: seed::quick_actions(),
            recent_activity: seed::recent_activity(),
        }
    }
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let dashboard = Dashboard::seeded();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render(&dashboard, ctx.color));
    }
    Ok(())
}

fn render(dashboard: &Dashboard, color: bool) -> String {
    let mut out = String::new();
    out.push_str("Dashboard\n=========\n");
    out.push_str("Welcome to MB Business - Your professional app ecosystem\n\n");

    let mut stats = output::table(vec!["Metric", "Value"]);
    for stat in &dashboard.stats {
        stats.add_row(vec![
            stat.label.to_string(),
            output::paint(stat.value, stat.tone, color),
        ]);
    }
    out.push_str(&format!("{stats}\n\n"));

    out.push_str(&output::section("Quick Actions"));
    out.push('\n');
    for action in &dashboard.quick_actions {
        out.push_str(&format!(
            "  {} -> mbb open {}\n    {}\n",
            action.title, action.href, action.description
        ));
    }
    out.push('\n');

    out.push_str(&output::section("Recent Activity"));
    out.push('\n');
    for entry in &dashboard.recent_activity {
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
mod tests {
    use super::*;

    #[test]
    fn render_contains_all_sections() {
        let out = render(&Dashboard::seeded(), false);
        assert!(out.contains("Active Apps"));
        assert!(out.contains("1,234"));
        assert!(out.contains("mbb open /app-store"));
        assert!(out.contains("mbb open /apps/bookings"));
        assert!(out.contains("System update available"));
    }

    #[test]
    fn dashboard_serializes_tones_lowercase() {
        let json = serde_json::to_string(&Dashboard::seeded()).unwrap();
        assert!(json.contains(r#""tone":"success""#));
    }
}
