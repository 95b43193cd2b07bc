//! MB Bookings タブの view（描画）

use super::model::Model;
use crate::catalog::{seed, BookingStatus};
use crate::filter::CategorySelector;
use crate::output;
use crate::tui::manager::core::{
    dialog_rect, render_filter_bar, render_tab_bar, tone_color, DataStore, Tab,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

const NEW_BOOKING_FIELDS: [&str; 5] = ["Client Name", "Service", "Date", "Time", "Notes"];

fn status_color(status: BookingStatus) -> Color {
    tone_color(output::status_tone(status))
}

/// 予約一覧ダイアログの高さ（1 件 2 行、最大 28）
fn schedule_dialog_height(rows: usize) -> u16 {
    u16::try_from(rows.max(1).saturating_mul(2))
        .unwrap_or(u16::MAX)
        .saturating_add(11)
        .min(28)
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model, data: &DataStore, filter_focused: bool) {
    let filtered = data.filtered_bookings(&model.query, &model.status);

    let dialog_width = 80u16;
    let dialog_height = schedule_dialog_height(filtered.len());

    let dialog_area = dialog_rect(dialog_width, dialog_height, f.area());
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(3), // フィルタバー
            Constraint::Length(1), // 統計
            Constraint::Length(1), // ステータス
            Constraint::Min(1),    // 予約一覧
            Constraint::Length(1), // ヘルプ
        ])
        .split(dialog_area);

    render_tab_bar(f, chunks[0], Tab::Bookings);
    render_filter_bar(f, chunks[1], &model.query, filter_focused);

    // 統計
    let mut stat_spans = Vec::new();
    for stat in seed::booking_stats() {
        stat_spans.push(Span::raw(format!(" {}: ", stat.label)));
        stat_spans.push(Span::styled(
            stat.value,
            Style::default()
                .fg(tone_color(stat.tone))
                .add_modifier(Modifier::BOLD),
        ));
        stat_spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(stat_spans)), chunks[2]);

    let status_label = match &model.status {
        CategorySelector::All => "All".to_string(),
        CategorySelector::Only(id) => data
            .bookings
            .category_name(id)
            .unwrap_or(id)
            .to_string(),
    };
    let mut status_spans = vec![
        Span::raw(" Status: "),
        Span::styled(status_label, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
    ];
    for status in BookingStatus::all() {
        status_spans.push(Span::styled(
            format!(" {} {}", status.as_str(), data.bookings.count_by_status(*status)),
            Style::default().fg(status_color(*status)),
        ));
    }
    let status_line = Line::from(status_spans);
    f.render_widget(Paragraph::new(status_line), chunks[3]);

    // 予約一覧
    let title = format!(" {} ", output::schedule_heading(model.date, filtered.len()));
    if filtered.is_empty() {
        let content = Paragraph::new("\n  No bookings matched")
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(content, chunks[4]);
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|b| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("  {:<9}", b.time)),
                        Span::styled(
                            format!("{:<15}", b.client),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("{} ({})  ", b.service, b.duration)),
                        Span::styled(b.status.as_str(), Style::default().fg(status_color(b.status))),
                    ]),
                    Line::styled(
                        if b.has_notes() {
                            format!("           {} | {} | {}", b.phone, b.email, b.notes)
                        } else {
                            format!("           {} | {}", b.phone, b.email)
                        },
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = model.state.clone();
        f.render_stateful_widget(list, chunks[4], &mut state);
    }

    let help = Paragraph::new(
        " Tab: switch | /: search | s: status | [/]: day | t: reset | n: new booking | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[5]);

    if model.new_booking_open {
        view_new_booking(f, dialog_area, model);
    }
}

/// 新規予約モーダルを描画
fn view_new_booking(f: &mut Frame, parent: Rect, model: &Model) {
    let width = 44u16;
    let height = NEW_BOOKING_FIELDS.len() as u16 + 4;
    let area = Rect::new(
        parent.x + parent.width.saturating_sub(width) / 2,
        parent.y + parent.height.saturating_sub(height) / 2,
        width.min(parent.width),
        height.min(parent.height),
    );
    f.render_widget(Clear, area);

    let default_date = model.date.format(crate::config::DATE_FORMAT).to_string();
    let mut lines: Vec<Line> = NEW_BOOKING_FIELDS
        .iter()
        .map(|field| {
            let placeholder = if *field == "Date" {
                default_date.clone()
            } else {
                String::new()
            };
            Line::from(vec![
                Span::raw(format!("  {:<12}", field)),
                Span::styled(
                    format!("[{:<20}]", placeholder),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "  Esc: cancel",
        Style::default().fg(Color::DarkGray),
    ));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(" New Booking ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(modal, area);
}
