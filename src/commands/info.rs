//! mbb info コマンド
//!
//! アプリの詳細情報を表示する。ID が見つからない場合は
//! エラーにせず「見つからない」状態を表示する。

use super::Context;
use crate::catalog::{AppCatalog, AppRecord};
use crate::error::Result;
use crate::output;
use clap::{Parser, ValueEnum};

/// 出力形式
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// App id (e.g. mb-bookings)
    pub app_id: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl Args {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            format: OutputFormat::default(),
        }
    }
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let catalog = ctx.config.app_catalog()?;
    let app = catalog.find(&args.app_id);
    tracing::debug!(app_id = %args.app_id, found = app.is_some(), "app lookup");

    match args.format {
        OutputFormat::Table => match app {
            Some(app) => print!("{}", render_detail(&catalog, app, ctx.color)),
            None => print!("{}", render_not_found(&args.app_id)),
        },
        // 見つからない場合は null を出力
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&app)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&app)?),
    }

    Ok(())
}

/// 「見つからない」状態
pub(crate) fn render_not_found(app_id: &str) -> String {
    format!(
        "App not found: {}\nUse `mbb apps` to browse available apps.\n",
        app_id
    )
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub(crate) fn render_detail(catalog: &AppCatalog, app: &AppRecord, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", app.name));
    out.push_str(&format!("{}\n", "=".repeat(app.name.chars().count())));
    out.push_str(&format!("Learn more about {} and its features\n\n", app.name));

    let mut table = output::table(vec!["Field", "Value"]);
    let category = catalog
        .category_name(&app.category)
        .unwrap_or(&app.category);
    let status = if app.installed {
        output::installed_badge(true, color)
    } else {
        "Not installed".to_string()
    };
    let path = app.detail_path();
    table.add_row(vec!["ID", app.id.as_str()]);
    table.add_row(vec!["Path", path.as_str()]);
    table.add_row(vec!["Developer", app.developer.as_str()]);
    table.add_row(vec!["Category", category]);
    table.add_row(vec!["Rating".to_string(), output::rating(app.rating)]);
    table.add_row(vec!["Downloads", app.downloads.as_str()]);
    table.add_row(vec!["Price", app.price.as_str()]);
    table.add_row(vec!["Version", or_na(app.version.as_deref())]);
    table.add_row(vec!["Size", or_na(app.size.as_deref())]);
    table.add_row(vec!["Last Updated", or_na(app.last_updated.as_deref())]);
    table.add_row(vec!["Status".to_string(), status]);
    table.add_row(vec!["Action", app.detail_action_label()]);
    out.push_str(&format!("{table}\n\n"));

    out.push_str(&output::section("About"));
    out.push('\n');
    out.push_str(app.long_description.as_deref().unwrap_or(&app.description));
    out.push_str("\n\n");

    if !app.features.is_empty() {
        out.push_str(&output::section("Key Features"));
        out.push('\n');
        let mut features = output::table(vec!["Feature", "Description"]);
        for feature in &app.features {
            features.add_row(vec![feature.title.as_str(), feature.description.as_str()]);
        }
        out.push_str(&format!("{features}\n\n"));
    }

    out.push_str(&output::section("Requirements"));
    out.push('\n');
    let mut requirements = output::table(vec!["Field", "Value"]);
    requirements.add_row(vec![
        "Compatibility".to_string(),
        format_list(&app.compatibility),
    ]);
    requirements.add_row(vec!["Permissions".to_string(), format_list(&app.permissions)]);
    out.push_str(&format!("{requirements}\n"));

    if !app.screenshots.is_empty() {
        out.push('\n');
        out.push_str(&output::section("Screenshots"));
        out.push('\n');
        for (index, url) in app.screenshots.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, url));
        }
    }

    out
}

#[cfg(test)]
#[path = "info_test.rs"]
mod tests;
