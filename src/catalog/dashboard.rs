//! ダッシュボード表示用の静的データ型

use serde::Serialize;

/// カード・インジケータの配色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Error,
    Purple,
}

/// 統計カード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// クイックアクション（遷移先パス付き）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

/// 最近のアクティビティ / 予定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub title: &'static str,
    pub when: &'static str,
    pub tone: Tone,
}
