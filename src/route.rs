//! ナビゲーションパスのルーティング
//!
//! パス文字列を画面とルートパラメータに対応付ける。

use serde::Serialize;

/// 画面ルート
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Home,
    /// `/app-store`
    AppStore,
    /// `/app-store/:appId`
    AppDetail { app_id: String },
    /// `/apps/bookings`
    Bookings,
}

impl Route {
    /// パスを解析（未知のパスは None）
    ///
    /// 末尾のスラッシュと先頭の `#`（ハッシュルーティング）は無視する。
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim().trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] if path.starts_with('/') => Some(Route::Home),
            ["app-store"] => Some(Route::AppStore),
            ["app-store", app_id] => Some(Route::AppDetail {
                app_id: (*app_id).to_string(),
            }),
            ["apps", "bookings"] => Some(Route::Bookings),
            _ => None,
        }
    }

    /// 正規化されたパス
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::AppStore => "/app-store".to_string(),
            Route::AppDetail { app_id } => format!("/app-store/{}", app_id),
            Route::Bookings => "/apps/bookings".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Dashboard",
            Route::AppStore => "App Store",
            Route::AppDetail { .. } => "App Details",
            Route::Bookings => "MB Bookings",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
