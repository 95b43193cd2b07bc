//! 設定ファイル（~/.mbb/config.toml）
//!
//! ファイルが存在しない場合はデフォルト値で動作する。
//! 設定ディレクトリは `MBB_HOME` で上書きできる。

use crate::catalog::{seed, AppCatalog, CatalogFile};
use crate::env::EnvVar;
use crate::error::{MbbError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// 設定ディレクトリを上書きする環境変数
pub const HOME_ENV: &str = "MBB_HOME";

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// 日付の入力形式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 色付き出力のモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// 標準出力に色を付けるか
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal() && !EnvVar::is_set("NO_COLOR"),
        }
    }
}

/// 表示設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: ColorMode,
}

/// 予約画面の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingsConfig {
    /// 初期選択日（YYYY-MM-DD）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_date: Option<String>,
}

/// アプリケーション設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON カタログファイル（相対パスは設定ディレクトリ基準）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub display: DisplayConfig,
    pub bookings: BookingsConfig,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// 設定ディレクトリ（`MBB_HOME` または `~/.mbb`）
    pub fn home_dir() -> Option<PathBuf> {
        EnvVar::get(HOME_ENV)
            .map(PathBuf::from)
            .or_else(|| EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".mbb")))
    }

    /// デフォルトの設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        Self::home_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// デフォルトパスから読み込み（ファイルがなければデフォルト値）
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content, path)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// TOML 文字列を解析して検証
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| MbbError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.default_date()?;
        Ok(config)
    }

    /// 予約画面の初期選択日
    pub fn default_date(&self) -> Result<NaiveDate> {
        let raw = self
            .bookings
            .default_date
            .as_deref()
            .unwrap_or(seed::DEFAULT_BOOKING_DATE);
        parse_date(raw).map_err(|message| MbbError::ConfigValue {
            key: "bookings.default_date".to_string(),
            message,
        })
    }

    /// カタログファイルの解決済みパス
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog_path.as_ref()?;
        if path.is_absolute() {
            return Some(path.clone());
        }
        Some(match &self.base_dir {
            Some(base) => base.join(path),
            None => path.clone(),
        })
    }

    /// アプリカタログを構築（`catalog_path` 未設定なら組み込みデータ）
    pub fn app_catalog(&self) -> Result<AppCatalog> {
        match self.resolved_catalog_path() {
            Some(path) => Ok(CatalogFile::load(&path)?.into_catalog()?),
            None => Ok(AppCatalog::seeded()?),
        }
    }
}

/// YYYY-MM-DD 形式の日付を解析
pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date ({})", raw, e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
