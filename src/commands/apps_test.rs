use super::*;
use clap::Parser;

#[derive(Debug, Parser)]
struct TestCli {
    #[command(flatten)]
    args: Args,
}

fn parse(argv: &[&str]) -> Args {
    let mut full = vec!["apps"];
    full.extend_from_slice(argv);
    TestCli::try_parse_from(full).unwrap().args
}

#[test]
fn defaults_are_unrestricted() {
    let args = parse(&[]);
    assert!(args.criteria().is_unrestricted());
}

#[test]
fn query_and_category_flags_build_criteria() {
    let args = parse(&["--query", "book", "--category", "business"]);
    let criteria = args.criteria();
    assert_eq!(criteria.query, "book");
    assert_eq!(
        criteria.category,
        CategorySelector::Only("business".to_string())
    );
}

#[test]
fn json_and_simple_conflict() {
    let result = TestCli::try_parse_from(["apps", "--json", "--simple"]);
    assert!(result.is_err());
}

#[test]
fn listing_heading_matches_filtered_count() {
    let catalog = AppCatalog::seeded().unwrap();
    let criteria = FilterCriteria::default().with_query("book");
    let filtered = catalog.filter(&criteria);

    let out = render_listing(&catalog, &filtered, false, false);
    assert!(out.contains("All Apps (1)"));
    assert!(out.contains("mb-bookings"));
    assert!(!out.contains("mb-analytics"));
}

#[test]
fn listing_always_shows_featured() {
    let catalog = AppCatalog::seeded().unwrap();
    let criteria = FilterCriteria::default().with_query("zzz");
    let filtered = catalog.filter(&criteria);

    let out = render_listing(&catalog, &filtered, false, false);
    assert!(out.contains("Featured Apps"));
    assert!(out.contains("MB Messenger"));
    assert!(out.contains("All Apps (0)"));
    assert!(out.contains("No apps matched"));
}

#[test]
fn listing_uses_category_display_name() {
    let catalog = AppCatalog::seeded().unwrap();
    let filtered = catalog.filter(&FilterCriteria::default());
    let out = render_listing(&catalog, &filtered, false, false);
    assert!(out.contains("Communication"));
    assert!(out.contains("Installed: 1 / 3"));
    assert!(out.contains("Open"));
    assert!(out.contains("Install"));
}

#[test]
fn simple_lists_ids_in_order() {
    let catalog = AppCatalog::seeded().unwrap();
    let filtered = catalog.filter(&FilterCriteria::default().with_query("mb"));
    assert_eq!(
        render_simple(&filtered, catalog.len()),
        "mb-bookings\nmb-analytics\nmb-messenger\n"
    );
}

#[test]
fn simple_empty_messages() {
    assert_eq!(render_simple(&[], 0), "No apps available\n");
    assert_eq!(render_simple(&[], 3), "No apps matched\n");
}

#[test]
fn default_args_match_cli_defaults() {
    let default = Args::default();
    let parsed = parse(&[]);
    assert_eq!(default.query, parsed.query);
    assert_eq!(default.category, parsed.category);
}

#[test]
fn featured_flag_parses() {
    let args = parse(&["--featured"]);
    assert!(args.featured);
    assert!(!Args::default().featured);
}

#[test]
fn featured_only_relabels_heading() {
    let catalog = AppCatalog::seeded().unwrap();
    let mut filtered = catalog.filter(&FilterCriteria::default());
    filtered.retain(|app| app.featured);

    let out = render_listing(&catalog, &filtered, true, false);
    assert!(out.contains("Featured Apps (2)"));
    assert!(!out.contains("All Apps"));
    assert!(out.contains("mb-bookings"));
    assert!(out.contains("mb-messenger"));
    assert!(!out.contains("mb-analytics"));
}
