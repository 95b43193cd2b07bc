//! ダッシュボード TUI
//!
//! ダッシュボード・アプリストア・予約管理の 3 タブを持つ TUI。
//!
//! ## モジュール構成
//!
//! - `core`: Model/Msg/update/view と共有データ
//! - `screens`: 各タブの実装

pub mod core;
mod screens;

use crate::route::Route;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

use self::core::{update, view, DataStore, Model};

/// TUI を実行
///
/// `route` を指定した場合はその画面から開始する。
pub fn run(data: DataStore, route: Option<Route>) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = event_loop(data, route);

    // ターミナルを復元（ループがエラーで終わった場合も）
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(data: DataStore, route: Option<Route>) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(data);
    if let Some(route) = route {
        model.navigate(route);
    }

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| view(f, &model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    update(&mut model, msg);
                }
            }
        }
    }

    Ok(())
}
