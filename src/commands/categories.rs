//! mbb categories コマンド

use super::Context;
use crate::catalog::{seed, AppCatalog};
use crate::error::Result;
use crate::filter::{CategorySelector, FilterCriteria};
use crate::output;
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// カテゴリと該当アプリ数
#[derive(Debug, Serialize, PartialEq, Eq)]
struct CategoryRow {
    id: String,
    name: String,
    apps: usize,
}

pub fn run(ctx: &Context, args: Args) -> Result<()> {
    let catalog = ctx.config.app_catalog()?;
    let rows = category_rows(&catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let mut table = output::table(vec!["ID", "Name", "Apps"]);
        for row in &rows {
            table.add_row(vec![row.id.clone(), row.name.clone(), row.apps.to_string()]);
        }
        println!("{table}");
    }

    Ok(())
}

/// 選択肢の順（先頭は `all`）で件数を集計
fn category_rows(catalog: &AppCatalog) -> Vec<CategoryRow> {
    catalog
        .category_options(seed::ALL_APPS_LABEL)
        .into_iter()
        .map(|c| {
            let criteria = FilterCriteria::default().with_category(CategorySelector::parse(&c.id));
            CategoryRow {
                apps: catalog.count(&criteria),
                id: c.id,
                name: c.name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_with_all_sentinel() {
        let catalog = AppCatalog::seeded().unwrap();
        let rows = category_rows(&catalog);
        assert_eq!(
            rows[0],
            CategoryRow {
                id: "all".to_string(),
                name: "All Apps".to_string(),
                apps: 3,
            }
        );
    }

    #[test]
    fn rows_count_per_category() {
        let catalog = AppCatalog::seeded().unwrap();
        let counts: Vec<(String, usize)> = category_rows(&catalog)
            .into_iter()
            .map(|r| (r.id, r.apps))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("all".to_string(), 3),
                ("productivity".to_string(), 0),
                ("business".to_string(), 1),
                ("communication".to_string(), 1),
                ("analytics".to_string(), 1),
            ]
        );
    }
}
