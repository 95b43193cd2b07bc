//! CLI 出力の共通ユーティリティ

use crate::catalog::{BookingStatus, Tone};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

/// 見出しと件数（例: `All Apps (3)`）
pub fn count_heading(title: &str, count: usize) -> String {
    format!("{} ({})", title, count)
}

/// 予約見出しの日付表記（例: `Monday, January 15, 2024`）
pub const HEADING_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// 予約日の見出し
pub fn schedule_heading(date: NaiveDate, count: usize) -> String {
    count_heading(
        &format!("Schedule for {}", date.format(HEADING_DATE_FORMAT)),
        count,
    )
}

/// 配色を適用（無効時はそのまま）
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Primary => text.blue().to_string(),
        Tone::Success => text.green().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Purple => text.magenta().to_string(),
    }
}

/// 予約ステータスの配色
pub fn status_tone(status: BookingStatus) -> Tone {
    match status {
        BookingStatus::Confirmed => Tone::Success,
        BookingStatus::Pending => Tone::Warning,
        BookingStatus::Cancelled => Tone::Error,
    }
}

/// 予約ステータスのバッジ
pub fn status_badge(status: BookingStatus, color: bool) -> String {
    paint(status.as_str(), status_tone(status), color)
}

/// インストール済みマーク
pub fn installed_badge(installed: bool, color: bool) -> String {
    match (installed, color) {
        (false, _) => String::new(),
        (true, true) => "✓ Installed".green().to_string(),
        (true, false) => "✓ Installed".to_string(),
    }
}

/// 評価の表示（例: `★ 4.9`）
pub fn rating(value: f32) -> String {
    format!("★ {:.1}", value)
}

/// UTF8_FULL プリセットのテーブル
pub fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}

/// 見出し + 下線
pub fn section(title: &str) -> String {
    format!("{}\n{}", title, "-".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_heading_format() {
        assert_eq!(count_heading("All Apps", 3), "All Apps (3)");
        assert_eq!(count_heading("All Apps", 0), "All Apps (0)");
    }

    #[test]
    fn schedule_heading_includes_weekday_and_count() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            schedule_heading(date, 3),
            "Schedule for Monday, January 15, 2024 (3)"
        );
    }

    #[test]
    fn paint_without_color_is_plain() {
        assert_eq!(paint("pending", Tone::Warning, false), "pending");
        assert!(paint("pending", Tone::Warning, true).contains("\x1b["));
    }

    #[test]
    fn status_tones_follow_status() {
        assert_eq!(status_tone(BookingStatus::Confirmed), Tone::Success);
        assert_eq!(status_tone(BookingStatus::Pending), Tone::Warning);
        assert_eq!(status_tone(BookingStatus::Cancelled), Tone::Error);
    }

    #[test]
    fn installed_badge_empty_when_not_installed() {
        assert_eq!(installed_badge(false, true), "");
        assert_eq!(installed_badge(true, false), "✓ Installed");
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(rating(4.9), "★ 4.9");
        assert_eq!(rating(5.0), "★ 5.0");
    }

    #[test]
    fn section_underline_matches_title() {
        assert_eq!(section("Upcoming"), "Upcoming\n--------");
    }
}
