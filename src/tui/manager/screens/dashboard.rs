//! Dashboard タブの Model/Msg/update/view
//!
//! 統計カードと最近のアクティビティの表示、クイックアクションからの画面遷移。

use crate::catalog::seed;
use crate::route::Route;
use crate::tui::manager::core::{dialog_rect, render_tab_bar, tone_color, Tab};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

// ============================================================================
// CacheState（タブ切替時の保持状態）
// ============================================================================

/// キャッシュ状態（タブ切替時に保持）
#[derive(Debug, Default)]
pub struct CacheState {
    pub selected_idx: usize,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// Dashboard タブの画面状態（クイックアクションの選択）
pub struct Model {
    pub state: ListState,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new() -> Self {
        Self::from_cache(&CacheState::default())
    }

    /// キャッシュから復元
    pub fn from_cache(cache: &CacheState) -> Self {
        let len = seed::quick_actions().len();
        let mut state = ListState::default();
        if len > 0 {
            state.select(Some(cache.selected_idx.min(len - 1)));
        }
        Self { state }
    }

    /// キャッシュ状態を取得
    pub fn to_cache(&self) -> CacheState {
        CacheState {
            selected_idx: self.state.selected().unwrap_or(0),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// Dashboard タブへのメッセージ
pub enum Msg {
    Up,
    Down,
    Enter,
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter => Some(Msg::Enter),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
///
/// クイックアクションが選ばれた場合は遷移先のルートを返す。
pub fn update(model: &mut Model, msg: Msg) -> Option<Route> {
    let actions = seed::quick_actions();
    if actions.is_empty() {
        return None;
    }
    let current = model.state.selected().unwrap_or(0);

    match msg {
        Msg::Up => {
            model.state.select(Some(current.saturating_sub(1)));
            None
        }
        Msg::Down => {
            model
                .state
                .select(Some((current + 1).min(actions.len() - 1)));
            None
        }
        Msg::Enter => actions.get(current).and_then(|a| Route::parse(a.href)),
    }
}

// ============================================================================
// view（描画）
// ============================================================================

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let stats = seed::home_stats();
    let actions = seed::quick_actions();
    let activity = seed::recent_activity();

    let dialog_width = 65u16;
    let dialog_height = (stats.len() + actions.len() * 2 + activity.len() + 9) as u16;

    let dialog_area = dialog_rect(dialog_width, dialog_height, f.area());
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                           // タブバー
            Constraint::Length(stats.len() as u16 + 2),      // 統計
            Constraint::Length(actions.len() as u16 * 2 + 2), // クイックアクション
            Constraint::Min(1),                              // アクティビティ
            Constraint::Length(1),                           // ヘルプ
        ])
        .split(dialog_area);

    // タブバー
    render_tab_bar(f, chunks[0], Tab::Dashboard);

    // 統計カード
    let stat_lines: Vec<Line> = stats
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::raw(format!("  {:<16}", s.label)),
                Span::styled(
                    s.value,
                    Style::default()
                        .fg(tone_color(s.tone))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    let stats_para = Paragraph::new(stat_lines).block(
        Block::default()
            .title(" Welcome to MB Business ")
            .borders(Borders::ALL),
    );
    f.render_widget(stats_para, chunks[1]);

    // クイックアクション
    let items: Vec<ListItem> = actions
        .iter()
        .map(|a| {
            ListItem::new(vec![
                Line::raw(format!("  {}", a.title)),
                Line::styled(
                    format!("    {}", a.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().title(" Quick Actions ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");
    let mut state = model.state.clone();
    f.render_stateful_widget(list, chunks[2], &mut state);

    // 最近のアクティビティ
    let activity_lines: Vec<Line> = activity
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::styled("  ● ", Style::default().fg(tone_color(a.tone))),
                Span::raw(a.title),
                Span::styled(
                    format!("  {}", a.when),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    let activity_para = Paragraph::new(activity_lines).block(
        Block::default()
            .title(" Recent Activity ")
            .borders(Borders::ALL),
    );
    f.render_widget(activity_para, chunks[3]);

    // ヘルプ
    let help = Paragraph::new(" Tab: switch | up/down: move | Enter: open | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_on_first_action_opens_app_store() {
        let mut model = Model::new();
        assert_eq!(update(&mut model, Msg::Enter), Some(Route::AppStore));
    }

    #[test]
    fn down_then_enter_opens_bookings() {
        let mut model = Model::new();
        assert_eq!(update(&mut model, Msg::Down), None);
        assert_eq!(update(&mut model, Msg::Enter), Some(Route::Bookings));
    }

    #[test]
    fn selection_is_clamped() {
        let mut model = Model::new();
        update(&mut model, Msg::Up);
        assert_eq!(model.state.selected(), Some(0));
        for _ in 0..5 {
            update(&mut model, Msg::Down);
        }
        assert_eq!(model.state.selected(), Some(1));
    }

    #[test]
    fn cache_restores_selection() {
        let mut model = Model::new();
        update(&mut model, Msg::Down);
        let restored = Model::from_cache(&model.to_cache());
        assert_eq!(restored.state.selected(), Some(1));
    }
}
