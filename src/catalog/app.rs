//! アプリストアのレコード

use super::record::CatalogRecord;
use serde::{Deserialize, Serialize};

/// アプリの主要機能（詳細画面用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppFeature {
    pub title: String,
    pub description: String,
}

/// インストール可能なアプリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    pub id: String,
    pub name: String,
    pub developer: String,
    pub category: String,
    pub description: String,
    pub rating: f32,
    pub downloads: String,
    pub price: String,
    #[serde(default)]
    pub installed: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compatibility: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<AppFeature>,
}

impl AppRecord {
    /// 一覧のアクションボタン表示
    pub fn action_label(&self) -> &'static str {
        if self.installed {
            "Open"
        } else {
            "Install"
        }
    }

    /// 詳細画面のアクションボタン表示
    pub fn detail_action_label(&self) -> &'static str {
        if self.installed {
            "Open Application"
        } else {
            "Install Now"
        }
    }

    /// 詳細画面のルートパス
    pub fn detail_path(&self) -> String {
        format!("/app-store/{}", self.id)
    }
}

impl CatalogRecord for AppRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> &str {
        &self.description
    }
}
