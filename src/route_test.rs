use super::*;

#[test]
fn parse_root_is_home() {
    assert_eq!(Route::parse("/"), Some(Route::Home));
    assert_eq!(Route::parse("#/"), Some(Route::Home));
}

#[test]
fn parse_app_store() {
    assert_eq!(Route::parse("/app-store"), Some(Route::AppStore));
    assert_eq!(Route::parse("/app-store/"), Some(Route::AppStore));
}

#[test]
fn parse_app_detail_carries_id() {
    assert_eq!(
        Route::parse("/app-store/mb-bookings"),
        Some(Route::AppDetail {
            app_id: "mb-bookings".to_string()
        })
    );
}

#[test]
fn parse_detail_keeps_unknown_id() {
    // ID の存在確認は詳細画面側で行う
    assert_eq!(
        Route::parse("/app-store/nonexistent"),
        Some(Route::AppDetail {
            app_id: "nonexistent".to_string()
        })
    );
}

#[test]
fn parse_bookings() {
    assert_eq!(Route::parse("/apps/bookings"), Some(Route::Bookings));
    assert_eq!(Route::parse("#/apps/bookings"), Some(Route::Bookings));
}

#[test]
fn parse_unknown_paths() {
    assert_eq!(Route::parse(""), None);
    assert_eq!(Route::parse("/analytics"), None);
    assert_eq!(Route::parse("/settings"), None);
    assert_eq!(Route::parse("/app-store/a/b"), None);
    assert_eq!(Route::parse("/apps"), None);
}

#[test]
fn path_round_trips() {
    for path in ["/", "/app-store", "/app-store/mb-analytics", "/apps/bookings"] {
        let route = Route::parse(path).unwrap();
        assert_eq!(route.path(), path);
        assert_eq!(route.to_string(), path);
    }
}
