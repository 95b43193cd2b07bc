//! mbb apps コマンド
//!
//! アプリストアの一覧を検索テキストとカテゴリで絞り込んで表示する。

use super::Context;
use crate::catalog::{seed, AppCatalog, AppRecord};
use crate::error::Result;
use crate::filter::{CategorySelector, FilterCriteria};
use crate::output;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(after_help = "OUTPUT FORMATS:\n  (default)  featured apps and a table of matching apps\n  --json     matching apps as a JSON array\n  --simple   matching app ids, one per line")]
pub struct Args {
    /// Case-insensitive text matched against app name and description
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Category id, or "all" for no restriction
    #[arg(long, short = 'c', default_value = CategorySelector::ALL)]
    pub category: String,

    /// Only featured apps (listed under a "Featured Apps (N)" heading)
    #[arg(long)]
    pub featured: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only app ids
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategorySelector::ALL.to_string(),
            featured: false,
            json: false,
            simple: false,
        }
    }
}

impl Args {
    /// 引数からフィルタ条件を構築
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.query.clone(), CategorySelector::parse(&self.category))
    }
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let catalog = ctx.config.app_catalog()?;
    let criteria = args.criteria();

    if let CategorySelector::Only(id) = &criteria.category {
        if catalog.category_name(id).is_none() {
            tracing::warn!(category = %id, "category is not declared, no apps will match");
        }
    }

    let mut filtered = catalog.filter(&criteria);
    if args.featured {
        filtered.retain(|app| app.featured);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else if args.simple {
        print!("{}", render_simple(&filtered, catalog.len()));
    } else {
        print!(
            "{}",
            render_listing(&catalog, &filtered, args.featured, ctx.color)
        );
    }

    Ok(())
}

/// 該当なしメッセージ
fn empty_message(total_count: usize) -> &'static str {
    if total_count == 0 {
        "No apps available\n"
    } else {
        "No apps matched\n"
    }
}

fn render_simple(apps: &[&AppRecord], total_count: usize) -> String {
    if apps.is_empty() {
        return empty_message(total_count).to_string();
    }
    apps.iter().map(|a| format!("{}\n", a.id)).collect()
}

/// おすすめ + 全アプリ一覧
///
/// おすすめ欄は絞り込み条件に関わらず常に表示し、
/// 一覧の見出し件数は絞り込み結果の件数と一致させる。
/// `featured_only` のときはおすすめ欄を省き、見出しを `Featured Apps (N)` にする。
pub(crate) fn render_listing(
    catalog: &AppCatalog,
    filtered: &[&AppRecord],
    featured_only: bool,
    color: bool,
) -> String {
    let mut out = String::new();

    let featured = catalog.featured();
    if !featured_only && !featured.is_empty() {
        out.push_str(&output::section(seed::FEATURED_APPS_LABEL));
        out.push('\n');
        for app in featured {
            out.push_str(&format!(
                "  {}  {}  {}  {}\n    {}\n",
                app.name,
                output::rating(app.rating),
                app.price,
                output::installed_badge(app.installed, color),
                app.description
            ));
        }
        out.push('\n');
    }

    let heading = if featured_only {
        seed::FEATURED_APPS_LABEL
    } else {
        seed::ALL_APPS_LABEL
    };
    out.push_str(&output::section(&output::count_heading(
        heading,
        filtered.len(),
    )));
    out.push('\n');

    if filtered.is_empty() {
        out.push_str(empty_message(catalog.len()));
        return out;
    }

    let mut table = output::table(vec![
        "ID", "Name", "Category", "Rating", "Downloads", "Price", "Action",
    ]);
    for app in filtered {
        let category = catalog
            .category_name(&app.category)
            .unwrap_or(&app.category);
        table.add_row(vec![
            app.id.clone(),
            app.name.clone(),
            category.to_string(),
            output::rating(app.rating),
            app.downloads.clone(),
            app.price.clone(),
            app.action_label().to_string(),
        ]);
    }
    out.push_str(&format!("{table}\n"));
    out.push_str(&format!(
        "Installed: {} / {}\n",
        catalog.installed_count(),
        catalog.len()
    ));
    out
}

#[cfg(test)]
#[path = "apps_test.rs"]
mod tests;
