use super::*;

#[test]
fn detail_shows_bookings_fields() {
    let catalog = AppCatalog::seeded().unwrap();
    let app = catalog.find("mb-bookings").unwrap();
    let out = render_detail(&catalog, app, false);

    assert!(out.starts_with("MB Bookings\n"));
    assert!(out.contains("2.1.0"));
    assert!(out.contains("/app-store/mb-bookings"));
    assert!(out.contains("12.5 MB"));
    assert!(out.contains("Smart Scheduling"));
    assert!(out.contains("Calendar Access"));
    assert!(out.contains("Open Application"));
    assert!(out.contains("Screenshots"));
}

#[test]
fn detail_without_extended_fields_uses_fallbacks() {
    let catalog = AppCatalog::seeded().unwrap();
    let app = catalog.find("mb-analytics").unwrap();
    let out = render_detail(&catalog, app, false);

    assert!(out.contains("Advanced analytics and reporting tools"));
    assert!(out.contains("N/A"));
    assert!(out.contains("Install Now"));
    assert!(out.contains("Not installed"));
    assert!(!out.contains("Key Features"));
    assert!(!out.contains("Screenshots"));
}

#[test]
fn not_found_is_a_display_state() {
    let out = render_not_found("nonexistent");
    assert!(out.contains("App not found: nonexistent"));
}

#[test]
fn not_found_serializes_as_null() {
    let catalog = AppCatalog::seeded().unwrap();
    let app = catalog.find("nonexistent");
    assert_eq!(serde_json::to_string(&app).unwrap(), "null");
}

#[test]
fn args_new_uses_table_format() {
    let args = Args::new("mb-bookings");
    assert_eq!(args.app_id, "mb-bookings");
    assert!(matches!(args.format, OutputFormat::Table));
}
