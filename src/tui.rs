//! TUI (Terminal User Interface)
//!
//! ratatui/crossterm を使用した対話型ダッシュボードを提供する。

mod manager;

pub use manager::core::DataStore;
pub use manager::run;
