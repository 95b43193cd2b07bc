//! 画面モジュール
//!
//! 各タブの実装を提供する。
//!
//! - `dashboard`: Dashboard タブ
//! - `app_store`: App Store タブ
//! - `bookings`: MB Bookings タブ

pub mod app_store;
pub mod bookings;
pub mod dashboard;
