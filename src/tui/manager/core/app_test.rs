use crossterm::event::KeyCode;

use super::{update, Model, Msg, Screen, Tab};
use crate::route::Route;
use crate::tui::manager::core::DataStore;
use crate::filter::CategorySelector;
use crate::tui::manager::screens::{app_store, bookings};

/// テスト用の Model を構築するヘルパー
fn make_model() -> Model {
    Model::new(DataStore::for_test())
}

fn app_store_model(model: &Model) -> &app_store::Model {
    match &model.screen {
        Screen::AppStore(m) => m,
        _ => panic!("Expected AppStore screen"),
    }
}

fn bookings_model(model: &Model) -> &bookings::Model {
    match &model.screen {
        Screen::Bookings(m) => m,
        _ => panic!("Expected Bookings screen"),
    }
}

fn visible_bookings(model: &Model) -> usize {
    let m = bookings_model(model);
    model.data.filtered_bookings(&m.query, &m.status).len()
}

fn selected_app(model: &Model) -> Option<String> {
    match app_store_model(model) {
        app_store::Model::AppList { selected_id, .. } => selected_id.clone(),
        app_store::Model::AppDetail { .. } => panic!("Expected AppList"),
    }
}

// ============================================================================
// Tab
// ============================================================================

#[test]
fn tabs_cycle_in_both_directions() {
    assert_eq!(Tab::Dashboard.next(), Tab::AppStore);
    assert_eq!(Tab::Bookings.next(), Tab::Dashboard);
    assert_eq!(Tab::Dashboard.prev(), Tab::Bookings);
    assert_eq!(Tab::from_index(Tab::AppStore.index()), Tab::AppStore);
}

#[test]
fn starts_on_dashboard() {
    let model = make_model();
    assert_eq!(model.screen.tab(), Tab::Dashboard);
}

// ============================================================================
// キー入力 → メッセージ
// ============================================================================

#[test]
fn right_and_left_switch_tabs_at_top_level() {
    let model = make_model();
    assert!(matches!(model.key_to_msg(KeyCode::Right), Some(Msg::NextTab)));
    assert!(matches!(model.key_to_msg(KeyCode::Left), Some(Msg::PrevTab)));
    assert!(matches!(model.key_to_msg(KeyCode::Tab), Some(Msg::NextTab)));
    assert!(matches!(model.key_to_msg(KeyCode::BackTab), Some(Msg::PrevTab)));
}

#[test]
fn slash_is_ignored_on_dashboard() {
    let model = make_model();
    assert!(model.key_to_msg(KeyCode::Char('/')).is_none());
}

#[test]
fn slash_focuses_filter_on_app_store() {
    let mut model = make_model();
    model.navigate(Route::AppStore);
    assert!(matches!(
        model.key_to_msg(KeyCode::Char('/')),
        Some(Msg::FilterFocus)
    ));
}

#[test]
fn tab_keys_are_ignored_in_detail() {
    let mut model = make_model();
    model.navigate(Route::AppDetail {
        app_id: "mb-bookings".to_string(),
    });
    assert!(model.key_to_msg(KeyCode::Right).is_none());
    assert!(model.key_to_msg(KeyCode::Char('/')).is_none());
}

#[test]
fn filter_focused_turns_chars_into_input() {
    let mut model = make_model();
    model.navigate(Route::AppStore);
    update(&mut model, Msg::FilterFocus);

    assert!(matches!(
        model.key_to_msg(KeyCode::Char('q')),
        Some(Msg::FilterInput('q'))
    ));
    assert!(matches!(
        model.key_to_msg(KeyCode::Esc),
        Some(Msg::FilterUnfocus)
    ));

    update(&mut model, Msg::FilterInput('b'));
    assert!(matches!(
        model.key_to_msg(KeyCode::Esc),
        Some(Msg::FilterClear)
    ));
}

#[test]
fn q_quits_when_filter_not_focused() {
    let mut model = make_model();
    let msg = model.key_to_msg(KeyCode::Char('q')).unwrap();
    update(&mut model, msg);
    assert!(model.should_quit);
}

// ============================================================================
// フィルタ入力と選択整合
// ============================================================================

#[test]
fn typing_filter_reclamps_selection() {
    let mut model = make_model();
    model.navigate(Route::AppStore);
    assert_eq!(selected_app(&model).as_deref(), Some("mb-bookings"));

    update(&mut model, Msg::FilterFocus);
    for c in "messag".chars() {
        update(&mut model, Msg::FilterInput(c));
    }
    assert_eq!(selected_app(&model).as_deref(), Some("mb-messenger"));

    update(&mut model, Msg::FilterClear);
    assert_eq!(model.screen.query(), "");
    assert_eq!(selected_app(&model).as_deref(), Some("mb-messenger"));
}

#[test]
fn no_match_clears_selection() {
    let mut model = make_model();
    model.navigate(Route::AppStore);
    for c in "zzz".chars() {
        update(&mut model, Msg::FilterInput(c));
    }
    assert_eq!(selected_app(&model), None);

    update(&mut model, Msg::FilterBackspace);
    update(&mut model, Msg::FilterBackspace);
    update(&mut model, Msg::FilterBackspace);
    assert_eq!(selected_app(&model).as_deref(), Some("mb-bookings"));
}

#[test]
fn tab_switch_unfocuses_filter() {
    let mut model = make_model();
    model.navigate(Route::AppStore);
    update(&mut model, Msg::FilterFocus);

    update(&mut model, Msg::NextTab);
    assert!(!model.filter_focused);
    assert_eq!(model.screen.tab(), Tab::Bookings);
}

#[test]
fn app_store_criteria_reset_on_revisit() {
    let mut model = make_model();
    model.navigate(Route::AppStore);
    update(&mut model, Msg::AppStore(app_store::Msg::Down));
    update(&mut model, Msg::AppStore(app_store::Msg::PrevCategory));
    for c in "ana".chars() {
        update(&mut model, Msg::FilterInput(c));
    }
    assert_eq!(model.screen.query(), "ana");

    update(&mut model, Msg::NextTab);
    // 他タブの検索文字列は引き継がない
    assert_eq!(model.screen.query(), "");
    assert_eq!(visible_bookings(&model), 3);

    update(&mut model, Msg::PrevTab);
    assert_eq!(model.screen.query(), "");
    match app_store_model(&model) {
        app_store::Model::AppList {
            category, state, ..
        } => {
            assert_eq!(*category, CategorySelector::All);
            assert_eq!(state.selected(), Some(1));
        }
        app_store::Model::AppDetail { .. } => panic!("Expected AppList"),
    }
    // 選択位置のみ保持される
    assert_eq!(selected_app(&model).as_deref(), Some("mb-analytics"));
}

#[test]
fn bookings_criteria_and_date_reset_on_revisit() {
    let mut model = make_model();
    model.navigate(Route::Bookings);
    update(&mut model, Msg::Bookings(bookings::Msg::NextStatus));
    update(&mut model, Msg::Bookings(bookings::Msg::NextDay));
    for c in "smith".chars() {
        update(&mut model, Msg::FilterInput(c));
    }
    assert_eq!(visible_bookings(&model), 1);

    update(&mut model, Msg::NextTab);
    update(&mut model, Msg::PrevTab);

    let m = bookings_model(&model);
    assert_eq!(m.query, "");
    assert_eq!(m.status, CategorySelector::All);
    assert_eq!(m.date, model.data.default_date);
    assert_eq!(m.selected_id.as_deref(), Some("1"));
    assert_eq!(visible_bookings(&model), 3);
}

// ============================================================================
// ルーティング
// ============================================================================

#[test]
fn navigate_to_detail_opens_app_store_detail() {
    let mut model = make_model();
    model.navigate(Route::AppDetail {
        app_id: "nonexistent".to_string(),
    });

    assert_eq!(model.screen.tab(), Tab::AppStore);
    match app_store_model(&model) {
        app_store::Model::AppDetail { app_id, .. } => {
            assert_eq!(app_id, "nonexistent");
            assert!(model.data.apps.find(app_id).is_none());
        }
        app_store::Model::AppList { .. } => panic!("Expected AppDetail"),
    }
}

#[test]
fn dashboard_quick_action_navigates() {
    let mut model = make_model();
    let msg = model.key_to_msg(KeyCode::Down).unwrap();
    update(&mut model, msg);
    let msg = model.key_to_msg(KeyCode::Enter).unwrap();
    update(&mut model, msg);

    assert_eq!(model.screen.tab(), Tab::Bookings);
}

#[test]
fn navigate_home_returns_to_dashboard() {
    let mut model = make_model();
    model.navigate(Route::Bookings);
    model.navigate(Route::Home);
    assert_eq!(model.screen.tab(), Tab::Dashboard);
}
