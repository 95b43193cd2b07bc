//! 共有データストア
//!
//! 全タブで共有される読み取り専用カタログを保持する。

use crate::catalog::{seed, AppCatalog, AppRecord, Booking, BookingCatalog, Category};
use crate::config::Config;
use crate::error::Result;
use crate::filter::{CategorySelector, FilterCriteria};
use chrono::NaiveDate;

/// アプリID
pub type AppId = String;

/// 共有データストア
pub struct DataStore {
    /// アプリカタログ
    pub apps: AppCatalog,
    /// 予約カタログ
    pub bookings: BookingCatalog,
    /// 予約画面の初期選択日
    pub default_date: NaiveDate,
}

impl DataStore {
    /// 設定からデータストアを構築
    pub fn load(config: &Config) -> Result<Self> {
        Ok(Self {
            apps: config.app_catalog()?,
            bookings: BookingCatalog::seeded()?,
            default_date: config.default_date()?,
        })
    }

    /// アプリの選択肢（先頭は `all`）
    pub fn app_categories(&self) -> Vec<Category> {
        self.apps.category_options(seed::ALL_APPS_LABEL)
    }

    /// 絞り込み済みアプリ一覧
    pub fn filtered_apps(&self, query: &str, category: &CategorySelector) -> Vec<&AppRecord> {
        self.apps
            .filter(&FilterCriteria::new(query, category.clone()))
    }

    /// 絞り込み済み予約一覧
    pub fn filtered_bookings(&self, query: &str, status: &CategorySelector) -> Vec<&Booking> {
        self.bookings
            .filter(&FilterCriteria::new(query, status.clone()))
    }

    /// テスト用の組み込みデータ
    #[cfg(test)]
    pub fn for_test() -> Self {
        Self {
            apps: AppCatalog::seeded().unwrap(),
            bookings: BookingCatalog::seeded().unwrap(),
            default_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    /// テスト用（アプリのみ差し替え）
    #[cfg(test)]
    pub fn with_apps(apps: Vec<AppRecord>) -> Self {
        Self {
            apps: AppCatalog::new(apps, seed::app_categories()).unwrap(),
            ..Self::for_test()
        }
    }
}
