//! 共通 UI ユーティリティ
//!
//! 複数タブで共有される描画ユーティリティ。

use super::app::Tab;
use crate::catalog::Tone;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

/// コンテンツに合わせたダイアログ領域を計算（左寄せ）
pub fn dialog_rect(width: u16, height: u16, area: Rect) -> Rect {
    Rect::new(area.x, area.y, width.min(area.width), height.min(area.height))
}

/// 配色に対応する端末色
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Blue,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Error => Color::Red,
        Tone::Purple => Color::Magenta,
    }
}

/// タブバーを描画
pub fn render_tab_bar(f: &mut Frame, area: Rect, current: Tab) {
    let tab_titles: Vec<&str> = Tab::all().iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(tab_titles)
        .select(current.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

/// フィルタバーを描画
pub fn render_filter_bar(f: &mut Frame, area: Rect, filter_text: &str, filter_focused: bool) {
    let (text, style) = if filter_focused {
        (
            format!("{}_", filter_text),
            Style::default().fg(Color::White),
        )
    } else if filter_text.is_empty() {
        (
            "Press / to search".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (filter_text.to_string(), Style::default().fg(Color::Gray))
    };

    let border_style = if filter_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let filter = Paragraph::new(format!(" {}", text)).style(style).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(filter, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(dialog_rect(65, 24, area), Rect::new(0, 0, 40, 10));
        assert_eq!(dialog_rect(20, 5, area), Rect::new(0, 0, 20, 5));
    }
}
