//! 予約レコード

use super::category::Category;
use super::record::CatalogRecord;
use serde::{Deserialize, Serialize};

/// 予約ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn all() -> &'static [BookingStatus] {
        &[
            BookingStatus::Confirmed,
            BookingStatus::Pending,
            BookingStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// 予約カタログのカテゴリ定義として列挙
    pub fn categories() -> Vec<Category> {
        Self::all()
            .iter()
            .map(|s| Category::new(s.as_str(), s.title()))
            .collect()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 予約
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub client: String,
    pub service: String,
    pub time: String,
    pub duration: String,
    pub status: BookingStatus,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

impl Booking {
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

impl CatalogRecord for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.client
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn description(&self) -> &str {
        &self.notes
    }
}
