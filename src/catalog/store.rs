//! 読み取り専用カタログ
//!
//! 起動時に一度だけ構築され、以後は変更されないレコードのスナップショット。
//! 構築時に ID の一意性とカテゴリの所属を検証する。

use super::app::AppRecord;
use super::booking::{Booking, BookingStatus};
use super::category::Category;
use super::record::CatalogRecord;
use super::seed;
use crate::filter::{self, CategorySelector, FilterCriteria};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// カタログ構築時の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Record id must not be empty")]
    EmptyId,

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Record '{id}' has an empty label")]
    EmptyLabel { id: String },

    #[error("Record '{id}' has undeclared category '{category}'")]
    UnknownCategory { id: String, category: String },
}

/// 読み取り専用カタログ
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    records: Vec<T>,
    categories: Vec<Category>,
}

pub type AppCatalog = Catalog<AppRecord>;
pub type BookingCatalog = Catalog<Booking>;

impl<T: CatalogRecord> Catalog<T> {
    /// レコードとカテゴリ定義からカタログを構築
    ///
    /// カテゴリ定義に含まれる `all` センチネルは選択肢専用として除外する。
    pub fn new(records: Vec<T>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = categories
            .into_iter()
            .filter(|c| c.id != CategorySelector::ALL)
            .collect();
        let declared: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();

        let mut seen = HashSet::new();
        for record in &records {
            let id = record.id();
            if id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }
            if record.label().trim().is_empty() {
                return Err(CatalogError::EmptyLabel { id: id.to_string() });
            }
            if !declared.contains(record.category()) {
                return Err(CatalogError::UnknownCategory {
                    id: id.to_string(),
                    category: record.category().to_string(),
                });
            }
        }

        tracing::debug!(
            records = records.len(),
            categories = categories.len(),
            "catalog snapshot built"
        );

        Ok(Self {
            records,
            categories,
        })
    }

    /// 宣言済みカテゴリ（センチネルを除く）
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// 選択肢用カテゴリ（先頭に `all` センチネル）
    pub fn category_options(&self, all_label: &str) -> Vec<Category> {
        std::iter::once(Category::new(CategorySelector::ALL, all_label))
            .chain(self.categories().iter().cloned())
            .collect()
    }

    /// カテゴリIDから表示名を取得
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// ID の完全一致で検索（見つからない場合は None）
    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// 条件に一致するレコードを定義順で返す
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&T> {
        filter::filter(&self.records, criteria)
    }

    /// 条件に一致するレコード数
    pub fn count(&self, criteria: &FilterCriteria) -> usize {
        filter::count(&self.records, criteria)
    }
}

impl AppCatalog {
    /// 組み込みのアプリカタログ
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::apps(), seed::app_categories())
    }

    /// おすすめアプリ（定義順）
    pub fn featured(&self) -> Vec<&AppRecord> {
        self.records.iter().filter(|a| a.featured).collect()
    }

    /// インストール済みアプリ数
    pub fn installed_count(&self) -> usize {
        self.records.iter().filter(|a| a.installed).count()
    }
}

impl BookingCatalog {
    /// 組み込みの予約カタログ
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::bookings(), BookingStatus::categories())
    }

    /// ステータス別の件数
    pub fn count_by_status(&self, status: BookingStatus) -> usize {
        self.records.iter().filter(|b| b.status == status).count()
    }
}

/// JSON カタログファイル（`catalog_path` で指定）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    pub apps: Vec<AppRecord>,
}

impl CatalogFile {
    /// ファイルから読み込み
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), apps = file.apps.len(), "catalog file loaded");
        Ok(file)
    }

    /// アプリカタログに変換（カテゴリ未定義なら組み込みの定義を使用）
    pub fn into_catalog(self) -> Result<AppCatalog, CatalogError> {
        let categories = if self.categories.is_empty() {
            seed::app_categories()
        } else {
            self.categories
        };
        Catalog::new(self.apps, categories)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
