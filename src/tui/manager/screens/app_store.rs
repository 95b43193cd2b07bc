//! App Store タブの Model/Msg/update/view
//!
//! アプリ一覧の検索・カテゴリ絞り込みと詳細表示。

mod model;
mod update;
mod view;

// Re-exports
pub use model::{key_to_msg, CacheState, Model, Msg};
pub use update::{clamp_selection, update};
pub use view::view;
