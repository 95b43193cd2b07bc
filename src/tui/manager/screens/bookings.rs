//! MB Bookings タブの Model/Msg/update/view
//!
//! 予約一覧の検索・ステータス絞り込み、選択日の切替、新規予約モーダル。
//! 選択日とモーダルの開閉は表示状態のみで、予約データは変更しない。

mod model;
mod update;
mod view;

// Re-exports
pub use model::{key_to_msg, CacheState, Model, Msg};
pub use update::{clamp_selection, update};
pub use view::view;
