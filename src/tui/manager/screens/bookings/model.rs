//! MB Bookings タブの Model/Msg 定義

use crate::catalog::BookingStatus;
use crate::filter::CategorySelector;
use crate::tui::manager::core::DataStore;
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// CacheState（タブ切替時の保持状態）
// ============================================================================

/// キャッシュ状態（タブ切替時に保持）
///
/// 保持するのは選択位置のみ。検索文字列、ステータス、選択日、モーダルの開閉は
/// 画面を離れると破棄する。
#[derive(Debug, Default, Clone)]
pub struct CacheState {
    pub selected_id: Option<String>,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// MB Bookings タブの画面状態
pub struct Model {
    pub selected_id: Option<String>,
    pub state: ListState,
    /// 検索文字列
    pub query: String,
    /// 選択日
    pub date: NaiveDate,
    /// ステータス絞り込み
    pub status: CategorySelector,
    /// 新規予約モーダルを表示中か
    pub new_booking_open: bool,
}

impl Model {
    /// キャッシュから復元（選択日は設定のデフォルト、絞り込みは解除）
    pub fn from_cache(data: &DataStore, cache: &CacheState) -> Self {
        Self {
            selected_id: cache
                .selected_id
                .clone()
                .filter(|id| data.bookings.find(id).is_some()),
            state: ListState::default(),
            query: String::new(),
            date: data.default_date,
            status: CategorySelector::All,
            new_booking_open: false,
        }
    }

    /// キャッシュ状態を取得
    pub fn to_cache(&self) -> CacheState {
        CacheState {
            selected_id: self.selected_id.clone(),
        }
    }

    /// トップレベル（タブ切替可能）かどうか
    pub fn is_top_level(&self) -> bool {
        !self.new_booking_open
    }
}

/// ステータス絞り込みの選択肢（先頭は `all`）
pub fn status_options() -> Vec<CategorySelector> {
    std::iter::once(CategorySelector::All)
        .chain(
            BookingStatus::all()
                .iter()
                .map(|s| CategorySelector::Only(s.as_str().to_string())),
        )
        .collect()
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// MB Bookings タブへのメッセージ
pub enum Msg {
    Up,
    Down,
    PrevDay,
    NextDay,
    ResetDate,
    NextStatus,
    ToggleNewBooking,
}

/// キーコードをメッセージに変換
///
/// モーダル表示中は閉じる操作のみ受け付ける。
pub fn key_to_msg(key: KeyCode, model: &Model) -> Option<Msg> {
    if model.new_booking_open {
        return match key {
            KeyCode::Esc | KeyCode::Char('n') => Some(Msg::ToggleNewBooking),
            _ => None,
        };
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Char('[') => Some(Msg::PrevDay),
        KeyCode::Char(']') => Some(Msg::NextDay),
        KeyCode::Char('t') => Some(Msg::ResetDate),
        KeyCode::Char('s') => Some(Msg::NextStatus),
        KeyCode::Char('n') => Some(Msg::ToggleNewBooking),
        _ => None,
    }
}
