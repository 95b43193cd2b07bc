//! App Store タブの view（描画）

use super::model::Model;
use crate::catalog::{seed, AppRecord};
use crate::filter::CategorySelector;
use crate::output;
use crate::tui::manager::core::{dialog_rect, render_filter_bar, render_tab_bar, DataStore, Tab};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model, data: &DataStore, filter_focused: bool) {
    match model {
        Model::AppList {
            state,
            query,
            category,
            ..
        } => {
            view_app_list(f, state.clone(), category, data, query, filter_focused);
        }
        Model::AppDetail { app_id, .. } => match data.apps.find(app_id) {
            Some(app) => view_app_detail(f, app, data),
            None => view_not_found(f, app_id),
        },
    }
}

/// カテゴリ選択の表示名
fn category_label(data: &DataStore, category: &CategorySelector) -> String {
    match category {
        CategorySelector::All => seed::ALL_APPS_LABEL.to_string(),
        CategorySelector::Only(id) => data.apps.category_name(id).unwrap_or(id).to_string(),
    }
}

/// 一覧ダイアログの高さ（枠 2 行 + タブ・フィルタ・カテゴリ・ヘルプ 6 行、最大 24）
fn list_dialog_height(rows: usize) -> u16 {
    u16::try_from(rows.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(8)
        .min(24)
}

/// アプリ一覧画面を描画
fn view_app_list(
    f: &mut Frame,
    mut state: ListState,
    category: &CategorySelector,
    data: &DataStore,
    query: &str,
    filter_focused: bool,
) {
    let filtered = data.filtered_apps(query, category);

    let dialog_width = 70u16;
    let dialog_height = list_dialog_height(filtered.len());

    let dialog_area = dialog_rect(dialog_width, dialog_height, f.area());
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(3), // フィルタバー
            Constraint::Length(1), // カテゴリ
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // ヘルプ
        ])
        .split(dialog_area);

    render_tab_bar(f, chunks[0], Tab::AppStore);
    render_filter_bar(f, chunks[1], query, filter_focused);

    let category_line = Line::from(vec![
        Span::raw(" Category: "),
        Span::styled(
            category_label(data, category),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(category_line), chunks[2]);

    // 見出しの件数は常に最新の絞り込み結果と一致
    let title = format!(
        " {} ",
        output::count_heading(seed::ALL_APPS_LABEL, filtered.len())
    );

    if filtered.is_empty() {
        let message = if data.apps.is_empty() {
            "\n  No apps available"
        } else {
            "\n  No apps matched"
        };
        let content = Paragraph::new(message)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(content, chunks[3]);
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|app| {
                let mut spans = vec![
                    Span::raw(format!("  {:<14}", app.name)),
                    Span::styled(
                        format!("{}  ", output::rating(app.rating)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(format!("{:<12}", app.price)),
                ];
                if app.installed {
                    spans.push(Span::styled(
                        "✓ Installed",
                        Style::default().fg(Color::Green),
                    ));
                }
                if app.featured {
                    spans.push(Span::styled(" ★", Style::default().fg(Color::Magenta)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Green),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[3], &mut state);
    }

    let help = Paragraph::new(" Tab: switch | /: search | c: category | Enter: details | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

/// アプリ詳細画面を描画
fn view_app_detail(f: &mut Frame, app: &AppRecord, data: &DataStore) {
    let dialog_width = 75u16;
    let dialog_height = 24u16;
    let dialog_area = dialog_rect(dialog_width, dialog_height, f.area());
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(8), // アプリ情報
            Constraint::Min(1),    // 説明・機能
            Constraint::Length(1), // ヘルプ
        ])
        .split(dialog_area);

    render_tab_bar(f, chunks[0], Tab::AppStore);

    let category = data
        .apps
        .category_name(&app.category)
        .unwrap_or(&app.category);
    let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(Color::White));
    let info_lines = vec![
        Line::from(vec![Span::raw("Developer: "), value(&app.developer)]),
        Line::from(vec![Span::raw("Category: "), value(category)]),
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(output::rating(app.rating), Style::default().fg(Color::Yellow)),
            Span::raw("  Downloads: "),
            value(&app.downloads),
        ]),
        Line::from(vec![
            Span::raw("Version: "),
            value(app.version.as_deref().unwrap_or("N/A")),
            Span::raw("  Size: "),
            value(app.size.as_deref().unwrap_or("N/A")),
        ]),
        Line::from(vec![Span::raw("Price: "), value(&app.price)]),
        Line::from(vec![
            Span::raw("Action: "),
            Span::styled(
                app.detail_action_label(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let info = Paragraph::new(info_lines).block(
        Block::default()
            .title(format!(" {} ", app.name))
            .borders(Borders::ALL),
    );
    f.render_widget(info, chunks[1]);

    let mut body: Vec<Line> = app
        .long_description
        .as_deref()
        .unwrap_or(&app.description)
        .lines()
        .map(|l| Line::raw(l.to_string()))
        .collect();
    if !app.features.is_empty() {
        body.push(Line::raw(""));
        body.push(Line::styled(
            "Key Features",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for feature in &app.features {
            body.push(Line::from(vec![
                Span::styled(
                    format!("• {}: ", feature.title),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(feature.description.clone()),
            ]));
        }
    }
    let about = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" About ").borders(Borders::ALL));
    f.render_widget(about, chunks[2]);

    let help = Paragraph::new(" Esc: back to App Store | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

/// 「見つからない」状態を描画
fn view_not_found(f: &mut Frame, app_id: &str) {
    let dialog_area = dialog_rect(55, 8, f.area());
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Min(1),    // メッセージ
            Constraint::Length(1), // ヘルプ
        ])
        .split(dialog_area);

    render_tab_bar(f, chunks[0], Tab::AppStore);

    let message = Paragraph::new(format!(
        "\n  App not found: {}\n  The app you're looking for doesn't exist.",
        app_id
    ))
    .block(Block::default().title(" App Details ").borders(Borders::ALL))
    .style(Style::default().fg(Color::Red));
    f.render_widget(message, chunks[1]);

    let help = Paragraph::new(" Esc: back to App Store | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_dialog_height_is_bounded() {
        assert_eq!(list_dialog_height(0), 9);
        assert_eq!(list_dialog_height(3), 11);
        assert_eq!(list_dialog_height(16), 24);
        assert_eq!(list_dialog_height(usize::from(u16::MAX)), 24);
        assert_eq!(list_dialog_height(usize::MAX), 24);
    }
}
