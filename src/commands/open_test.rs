use super::*;
use crate::error::ErrorCode;

#[test]
fn resolve_known_paths() {
    assert_eq!(resolve("/").unwrap(), Route::Home);
    assert_eq!(resolve("/app-store/").unwrap(), Route::AppStore);
    assert_eq!(
        resolve("/app-store/mb-bookings").unwrap(),
        Route::AppDetail {
            app_id: "mb-bookings".to_string()
        }
    );
    assert_eq!(resolve("/apps/bookings").unwrap(), Route::Bookings);
}

#[test]
fn resolve_unknown_path_is_val002() {
    let err = resolve("/settings").unwrap_err();
    assert!(matches!(&err, MbbError::UnknownRoute(p) if p == "/settings"));
    assert_eq!(err.code(), ErrorCode::Val002);
}

#[test]
fn detail_of_missing_app_is_not_an_error() {
    let ctx = Context::default();
    let args = Args {
        path: "/app-store/nonexistent".to_string(),
    };
    assert!(run(&ctx, args).is_ok());
}
