//! App Store タブの Model/Msg 定義

use crate::filter::CategorySelector;
use crate::tui::manager::core::{AppId, DataStore};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// CacheState（タブ切替時の保持状態）
// ============================================================================

/// キャッシュ状態（タブ切替時に保持）
///
/// 保持するのは選択位置のみ。検索文字列とカテゴリは画面を離れると破棄する。
#[derive(Debug, Default, Clone)]
pub struct CacheState {
    pub selected_id: Option<AppId>,
}

/// 詳細画面へ遷移する直前の一覧状態（戻るときに復元）
#[derive(Debug, Default, Clone)]
pub struct SavedList {
    pub selected_id: Option<AppId>,
    pub query: String,
    pub category: CategorySelector,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// App Store タブの画面状態
pub enum Model {
    /// アプリ一覧画面
    AppList {
        selected_id: Option<AppId>,
        state: ListState,
        /// 検索文字列
        query: String,
        category: CategorySelector,
    },
    /// アプリ詳細画面
    ///
    /// `app_id` がカタログに存在しない場合は「見つからない」状態を表示する。
    AppDetail { app_id: AppId, saved: SavedList },
}

impl Model {
    /// キャッシュから復元（検索条件は空、カテゴリは `all`）
    ///
    /// 選択位置はフィルタ適用後に `clamp_selection` で整合させる。
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        Self::from_saved(
            data,
            SavedList {
                selected_id: cache.selected_id.clone(),
                ..SavedList::default()
            },
        )
    }

    /// 詳細画面から一覧へ戻る
    pub fn from_saved(data: &DataStore, saved: SavedList) -> Self {
        let selected_id = saved.selected_id.filter(|id| data.apps.find(id).is_some());

        Model::AppList {
            selected_id,
            state: ListState::default(),
            query: saved.query,
            category: saved.category,
        }
    }

    /// キャッシュ状態を取得
    pub fn to_cache(&self) -> CacheState {
        let selected_id = match self {
            Model::AppList { selected_id, .. } => selected_id.clone(),
            Model::AppDetail { saved, .. } => saved.selected_id.clone(),
        };
        CacheState { selected_id }
    }

    /// 詳細画面へ遷移
    pub fn open_detail(&mut self, app_id: AppId) {
        let saved = match self {
            Model::AppList {
                selected_id,
                query,
                category,
                ..
            } => SavedList {
                selected_id: selected_id.take(),
                query: std::mem::take(query),
                category: category.clone(),
            },
            Model::AppDetail { saved, .. } => std::mem::take(saved),
        };
        *self = Model::AppDetail { app_id, saved };
    }

    /// 現在の検索文字列（詳細画面では空）
    pub fn query(&self) -> &str {
        match self {
            Model::AppList { query, .. } => query,
            Model::AppDetail { .. } => "",
        }
    }

    /// 検索文字列の編集用参照（一覧画面のみ）
    pub fn query_mut(&mut self) -> Option<&mut String> {
        match self {
            Model::AppList { query, .. } => Some(query),
            Model::AppDetail { .. } => None,
        }
    }

    /// トップレベル（タブ切替可能）かどうか
    pub fn is_top_level(&self) -> bool {
        matches!(self, Model::AppList { .. })
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// App Store タブへのメッセージ
pub enum Msg {
    Up,
    Down,
    Enter,
    Back,
    NextCategory,
    PrevCategory,
}

/// キーコードをメッセージに変換
///
/// フィルタ非フォーカス時にのみ呼ばれるため、文字キーはフィルタ入力と競合しない。
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter => Some(Msg::Enter),
        KeyCode::Esc | KeyCode::Backspace => Some(Msg::Back),
        KeyCode::Char('c') => Some(Msg::NextCategory),
        KeyCode::Char('C') => Some(Msg::PrevCategory),
        _ => None,
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
