//! カタログ層
//!
//! アプリ・予約などの静的レコードと、その読み取り専用スナップショットを提供する。

mod app;
mod booking;
mod category;
mod dashboard;
mod record;
pub mod seed;
mod store;

pub use app::AppRecord;
pub use booking::{Booking, BookingStatus};
pub use category::Category;
pub use dashboard::{ActivityEntry, QuickAction, Stat, Tone};
pub use record::CatalogRecord;
pub use store::{AppCatalog, BookingCatalog, CatalogError, CatalogFile};
