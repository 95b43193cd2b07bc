use super::*;
use crate::catalog::{seed, AppRecord, Booking, BookingStatus};

fn make_app(id: &str, name: &str, category: &str, description: &str) -> AppRecord {
    AppRecord {
        id: id.to_string(),
        name: name.to_string(),
        developer: "ModelBoard".to_string(),
        category: category.to_string(),
        description: description.to_string(),
        rating: 4.5,
        downloads: "1K+".to_string(),
        price: "Free".to_string(),
        installed: false,
        featured: false,
        screenshots: vec![],
        long_description: None,
        version: None,
        size: None,
        compatibility: vec![],
        permissions: vec![],
        last_updated: None,
        features: vec![],
    }
}

fn three_apps() -> Vec<AppRecord> {
    vec![
        make_app(
            "mb-bookings",
            "MB Bookings",
            "business",
            "Complete booking and appointment management system for professionals",
        ),
        make_app("mb-analytics", "MB Analytics", "analytics", "Advanced analytics..."),
        make_app(
            "mb-messenger",
            "MB Messenger",
            "communication",
            "Secure messaging...",
        ),
    ]
}

fn ids(records: &[&AppRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

// ========================================
// CategorySelector tests
// ========================================

#[test]
fn selector_parse_all_sentinel() {
    assert_eq!(CategorySelector::parse("all"), CategorySelector::All);
    assert!(CategorySelector::parse("all").is_all());
}

#[test]
fn selector_parse_is_case_sensitive() {
    assert_eq!(
        CategorySelector::parse("ALL"),
        CategorySelector::Only("ALL".to_string())
    );
}

#[test]
fn selector_round_trips_as_str() {
    assert_eq!(CategorySelector::parse("business").as_str(), "business");
    assert_eq!(CategorySelector::All.to_string(), "all");
}

#[test]
fn selector_matches_exactly() {
    let selector = CategorySelector::Only("business".to_string());
    assert!(selector.matches("business"));
    assert!(!selector.matches("Business"));
    assert!(!selector.matches("business "));
}

// ========================================
// filter tests
// ========================================

#[test]
fn empty_criteria_returns_all_in_order() {
    let apps = three_apps();
    let result = filter(&apps, &FilterCriteria::default());
    assert_eq!(
        ids(&result),
        vec!["mb-bookings", "mb-analytics", "mb-messenger"]
    );
}

#[test]
fn empty_records_returns_empty() {
    let apps: Vec<AppRecord> = vec![];
    let criteria = FilterCriteria::default().with_query("book");
    assert!(filter(&apps, &criteria).is_empty());
}

#[test]
fn query_book_matches_bookings_only() {
    let apps = three_apps();
    let criteria = FilterCriteria::new("book", CategorySelector::All);
    assert_eq!(ids(&filter(&apps, &criteria)), vec!["mb-bookings"]);
}

#[test]
fn category_analytics_matches_analytics_only() {
    let apps = three_apps();
    let criteria = FilterCriteria::new("", CategorySelector::parse("analytics"));
    assert_eq!(ids(&filter(&apps, &criteria)), vec!["mb-analytics"]);
}

#[test]
fn unmatched_query_returns_empty() {
    let apps = three_apps();
    let criteria = FilterCriteria::new("zzz", CategorySelector::All);
    assert!(filter(&apps, &criteria).is_empty());
}

#[test]
fn common_prefix_returns_all_in_original_order() {
    let apps = three_apps();
    let criteria = FilterCriteria::new("mb", CategorySelector::All);
    assert_eq!(
        ids(&filter(&apps, &criteria)),
        vec!["mb-bookings", "mb-analytics", "mb-messenger"]
    );
}

#[test]
fn query_is_case_insensitive() {
    let apps = three_apps();
    let upper = filter(&apps, &FilterCriteria::default().with_query("BOOK"));
    let lower = filter(&apps, &FilterCriteria::default().with_query("book"));
    assert_eq!(ids(&upper), ids(&lower));
}

#[test]
fn query_matches_description() {
    let apps = three_apps();
    let criteria = FilterCriteria::default().with_query("appointment");
    assert_eq!(ids(&filter(&apps, &criteria)), vec!["mb-bookings"]);
}

#[test]
fn query_and_category_must_both_match() {
    let apps = three_apps();
    let criteria = FilterCriteria::new("book", CategorySelector::parse("analytics"));
    assert!(filter(&apps, &criteria).is_empty());
}

#[test]
fn unknown_category_yields_empty_not_error() {
    let apps = three_apps();
    let criteria = FilterCriteria::default().with_category(CategorySelector::parse("games"));
    assert!(filter(&apps, &criteria).is_empty());
}

#[test]
fn regex_metacharacters_are_literal() {
    let apps = vec![
        make_app("a", "C++ Tools", "business", "compilers"),
        make_app("b", "Cxx Tools", "business", "compilers"),
    ];
    let result = filter(&apps, &FilterCriteria::default().with_query("c++"));
    assert_eq!(ids(&result), vec!["a"]);

    let result = filter(&apps, &FilterCriteria::default().with_query(".*"));
    assert!(result.is_empty());
}

#[test]
fn filter_does_not_mutate_input() {
    let apps = three_apps();
    let before = apps.clone();
    let _ = filter(&apps, &FilterCriteria::default().with_query("book"));
    assert_eq!(apps, before);
}

#[test]
fn count_matches_filter_len() {
    let apps = three_apps();
    for query in ["", "mb", "book", "zzz"] {
        let criteria = FilterCriteria::default().with_query(query);
        assert_eq!(count(&apps, &criteria), filter(&apps, &criteria).len());
    }
}

#[test]
fn query_and_category_must_both_hold() {
    let apps = three_apps();
    let criteria = FilterCriteria::new("SECURE", CategorySelector::parse("communication"));
    assert_eq!(ids(&filter(&apps, &criteria)), vec!["mb-messenger"]);

    let criteria = FilterCriteria::new("SECURE", CategorySelector::parse("business"));
    assert!(filter(&apps, &criteria).is_empty());
}

// ========================================
// bookings tests
// ========================================

#[test]
fn bookings_filter_by_status() {
    let bookings = seed::bookings();
    let criteria = FilterCriteria::default()
        .with_category(CategorySelector::parse(BookingStatus::Confirmed.as_str()));
    let result: Vec<&Booking> = filter(&bookings, &criteria);
    let clients: Vec<&str> = result.iter().map(|b| b.client.as_str()).collect();
    assert_eq!(clients, vec!["John Smith", "Mike Wilson"]);
}

#[test]
fn bookings_query_searches_client_and_notes() {
    let bookings = seed::bookings();
    let by_client = filter(&bookings, &FilterCriteria::default().with_query("sarah"));
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_client[0].id, "2");

    let by_notes = filter(&bookings, &FilterCriteria::default().with_query("growth"));
    assert_eq!(by_notes.len(), 1);
    assert_eq!(by_notes[0].id, "3");
}
