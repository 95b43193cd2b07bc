//! ダッシュボード TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: アプリケーション全体の状態（データ + 画面 + キャッシュ）
//! - `Screen`: アクティブ画面の状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `ScreenCache`: タブ切替時に保持する軽量な状態
//!
//! 検索文字列やカテゴリなどの絞り込み条件は各画面の Model が持ち、
//! タブを離れると破棄される。キャッシュに残すのは選択位置のみ。

use super::data::DataStore;
use crate::route::Route;
use crate::tui::manager::screens::{app_store, bookings, dashboard};
use crossterm::event::KeyCode;
use ratatui::prelude::*;

// ============================================================================
// Screen Cache（タブ切替時の状態保持）
// ============================================================================

/// タブ切替時に保持する軽量な状態
#[derive(Debug, Default)]
pub struct ScreenCache {
    pub dashboard: dashboard::CacheState,
    pub app_store: app_store::CacheState,
    pub bookings: bookings::CacheState,
}

// ============================================================================
// Tab（タブ種別）
// ============================================================================

/// タブ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    AppStore,
    Bookings,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::AppStore, Tab::Bookings]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::AppStore => "App Store",
            Tab::Bookings => "MB Bookings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::AppStore => 1,
            Tab::Bookings => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Tab::Dashboard,
            1 => Tab::AppStore,
            _ => Tab::Bookings,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

// ============================================================================
// Screen（アクティブ画面の状態）
// ============================================================================

/// アクティブ画面の状態
pub enum Screen {
    Dashboard(dashboard::Model),
    AppStore(app_store::Model),
    Bookings(bookings::Model),
}

impl Screen {
    /// 現在のタブを取得
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Dashboard(_) => Tab::Dashboard,
            Screen::AppStore(_) => Tab::AppStore,
            Screen::Bookings(_) => Tab::Bookings,
        }
    }

    /// トップレベル（タブ切替可能な状態）かどうか
    pub fn is_top_level(&self) -> bool {
        match self {
            Screen::Dashboard(_) => true,
            Screen::AppStore(m) => m.is_top_level(),
            Screen::Bookings(m) => m.is_top_level(),
        }
    }

    /// 検索フィルタを使う画面か
    pub fn accepts_filter(&self) -> bool {
        match self {
            Screen::Dashboard(_) => false,
            Screen::AppStore(m) => m.is_top_level(),
            Screen::Bookings(m) => m.is_top_level(),
        }
    }

    /// 現在の画面の検索文字列
    pub fn query(&self) -> &str {
        match self {
            Screen::Dashboard(_) => "",
            Screen::AppStore(m) => m.query(),
            Screen::Bookings(m) => &m.query,
        }
    }

    fn query_mut(&mut self) -> Option<&mut String> {
        match self {
            Screen::Dashboard(_) => None,
            Screen::AppStore(m) => m.query_mut(),
            Screen::Bookings(m) => Some(&mut m.query),
        }
    }
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
pub enum Msg {
    /// 終了
    Quit,
    /// 次のタブへ
    NextTab,
    /// 前のタブへ
    PrevTab,
    /// フィルタにフォーカス移動
    FilterFocus,
    /// フィルタからフォーカス解除（リストへ戻る）
    FilterUnfocus,
    /// フィルタ文字入力
    FilterInput(char),
    /// フィルタ文字削除
    FilterBackspace,
    /// フィルタクリア
    FilterClear,
    /// Dashboard タブのメッセージ
    Dashboard(dashboard::Msg),
    /// App Store タブのメッセージ
    AppStore(app_store::Msg),
    /// Bookings タブのメッセージ
    Bookings(bookings::Msg),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 共有データストア
    pub data: DataStore,
    /// アクティブ画面
    pub screen: Screen,
    /// タブキャッシュ
    pub cache: ScreenCache,
    /// 終了フラグ
    pub should_quit: bool,
    /// フィルタ入力欄にフォーカスしているか
    pub filter_focused: bool,
}

impl Model {
    /// 新しいモデルを作成（Dashboard から開始）
    pub fn new(data: DataStore) -> Self {
        let screen = Screen::Dashboard(dashboard::Model::new());

        Self {
            data,
            screen,
            cache: ScreenCache::default(),
            should_quit: false,
            filter_focused: false,
        }
    }

    /// ルートに対応する画面へ遷移
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "navigate");
        match route {
            Route::Home => switch_tab(self, Tab::Dashboard),
            Route::AppStore => switch_tab(self, Tab::AppStore),
            Route::AppDetail { app_id } => {
                switch_tab(self, Tab::AppStore);
                if let Screen::AppStore(m) = &mut self.screen {
                    m.open_detail(app_id);
                }
            }
            Route::Bookings => switch_tab(self, Tab::Bookings),
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        let is_top_level = self.screen.is_top_level();

        if self.filter_focused {
            // フィルタにフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.screen.query().is_empty() => Some(Msg::FilterClear),
                KeyCode::Esc => Some(Msg::FilterUnfocus),
                KeyCode::Down | KeyCode::Enter => Some(Msg::FilterUnfocus),
                KeyCode::Tab if is_top_level => Some(Msg::NextTab),
                KeyCode::BackTab if is_top_level => Some(Msg::PrevTab),
                KeyCode::Backspace => Some(Msg::FilterBackspace),
                KeyCode::Char(c) => Some(Msg::FilterInput(c)),
                _ => None,
            }
        } else {
            // リスト（通常）フォーカス時のキー処理
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab | KeyCode::Right if is_top_level => Some(Msg::NextTab),
                KeyCode::BackTab | KeyCode::Left if is_top_level => Some(Msg::PrevTab),
                KeyCode::Char('/') if self.screen.accepts_filter() => Some(Msg::FilterFocus),
                // 画面固有のキー処理に委譲
                _ => match &self.screen {
                    Screen::Dashboard(_) => dashboard::key_to_msg(key).map(Msg::Dashboard),
                    Screen::AppStore(_) => app_store::key_to_msg(key).map(Msg::AppStore),
                    Screen::Bookings(m) => bookings::key_to_msg(key, m).map(Msg::Bookings),
                },
            }
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::NextTab => {
            model.filter_focused = false;
            switch_tab(model, model.screen.tab().next());
        }
        Msg::PrevTab => {
            model.filter_focused = false;
            switch_tab(model, model.screen.tab().prev());
        }
        Msg::FilterFocus => {
            model.filter_focused = true;
        }
        Msg::FilterUnfocus => {
            model.filter_focused = false;
        }
        Msg::FilterInput(c) => {
            if let Some(query) = model.screen.query_mut() {
                query.push(c);
            }
            clamp_selection(model);
        }
        Msg::FilterBackspace => {
            if let Some(query) = model.screen.query_mut() {
                query.pop();
            }
            clamp_selection(model);
        }
        Msg::FilterClear => {
            if let Some(query) = model.screen.query_mut() {
                query.clear();
            }
            clamp_selection(model);
        }
        Msg::Dashboard(msg) => {
            let route = match &mut model.screen {
                Screen::Dashboard(m) => dashboard::update(m, msg),
                _ => None,
            };
            if let Some(route) = route {
                model.navigate(route);
            }
        }
        Msg::AppStore(msg) => {
            if let Screen::AppStore(m) = &mut model.screen {
                app_store::update(m, msg, &model.data);
            }
        }
        Msg::Bookings(msg) => {
            if let Screen::Bookings(m) = &mut model.screen {
                bookings::update(m, msg, &model.data);
            }
        }
    }
}

/// フィルタ変更後に選択状態を整合させる
fn clamp_selection(model: &mut Model) {
    match &mut model.screen {
        Screen::AppStore(m) => app_store::clamp_selection(m, &model.data),
        Screen::Bookings(m) => bookings::clamp_selection(m, &model.data),
        Screen::Dashboard(_) => {}
    }
}

/// タブを切り替え
fn switch_tab(model: &mut Model, new_tab: Tab) {
    // 現在の画面状態をキャッシュに保存
    match &model.screen {
        Screen::Dashboard(m) => {
            model.cache.dashboard = m.to_cache();
        }
        Screen::AppStore(m) => {
            model.cache.app_store = m.to_cache();
        }
        Screen::Bookings(m) => {
            model.cache.bookings = m.to_cache();
        }
    }

    // 新しい画面を作成（選択位置のみキャッシュから復元）
    model.screen = match new_tab {
        Tab::Dashboard => Screen::Dashboard(dashboard::Model::from_cache(&model.cache.dashboard)),
        Tab::AppStore => Screen::AppStore(app_store::Model::from_cache(
            &model.data,
            &model.cache.app_store,
        )),
        Tab::Bookings => Screen::Bookings(bookings::Model::from_cache(
            &model.data,
            &model.cache.bookings,
        )),
    };

    // 復元後にフィルタ済みリストと選択状態を整合
    clamp_selection(model);
}

// ============================================================================
// view（描画）
// ============================================================================

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    match &model.screen {
        Screen::Dashboard(m) => dashboard::view(f, m),
        Screen::AppStore(m) => app_store::view(f, m, &model.data, model.filter_focused),
        Screen::Bookings(m) => bookings::view(f, m, &model.data, model.filter_focused),
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
