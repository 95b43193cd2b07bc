//! App Store タブの update（状態更新）

use super::model::{Model, Msg};
use crate::filter::CategorySelector;
use crate::tui::manager::core::DataStore;

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg, data: &DataStore) {
    match msg {
        Msg::Up => move_selection(model, data, -1),
        Msg::Down => move_selection(model, data, 1),
        Msg::Enter => enter(model),
        Msg::Back => back(model, data),
        Msg::NextCategory => cycle_category(model, data, 1),
        Msg::PrevCategory => cycle_category(model, data, -1),
    }
}

/// 選択を移動（端で止まる）
fn move_selection(model: &mut Model, data: &DataStore, delta: isize) {
    let Model::AppList {
        selected_id,
        state,
        query,
        category,
    } = model
    else {
        return;
    };

    let filtered = data.filtered_apps(query, category);
    if filtered.is_empty() {
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = current
        .saturating_add_signed(delta)
        .min(filtered.len() - 1);
    state.select(Some(next));
    *selected_id = Some(filtered[next].id.clone());
}

/// 詳細画面へ遷移
fn enter(model: &mut Model) {
    if let Model::AppList {
        selected_id: Some(id),
        ..
    } = model
    {
        let id = id.clone();
        model.open_detail(id);
    }
}

/// 一覧へ戻る
fn back(model: &mut Model, data: &DataStore) {
    if let Model::AppDetail { app_id, saved } = model {
        let mut saved = std::mem::take(saved);
        // 見つからない ID で遷移した場合は一覧の選択を変えない
        if data.apps.find(app_id).is_some() {
            saved.selected_id = Some(app_id.clone());
        }
        *model = Model::from_saved(data, saved);
        clamp_selection(model, data);
    }
}

/// カテゴリを順送り（`all` → 宣言順 → `all`）
fn cycle_category(model: &mut Model, data: &DataStore, step: isize) {
    if let Model::AppList { category, .. } = model {
        let options = data.app_categories();
        let current = options
            .iter()
            .position(|c| c.id == category.as_str())
            .unwrap_or(0);
        let len = options.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        *category = CategorySelector::parse(&options[next].id);
        tracing::debug!(category = %category, "category changed");
    }
    clamp_selection(model, data);
}

/// 絞り込み条件の変更後に選択状態を整合させる
///
/// 選択中のアプリが結果に残っていればその位置へ、なければ先頭を選択する。
pub fn clamp_selection(model: &mut Model, data: &DataStore) {
    let Model::AppList {
        selected_id,
        state,
        query,
        category,
    } = model
    else {
        return;
    };

    let filtered = data.filtered_apps(query, category);
    let position = selected_id
        .as_ref()
        .and_then(|id| filtered.iter().position(|a| &a.id == id));

    match (position, filtered.first()) {
        (Some(idx), _) => state.select(Some(idx)),
        (None, Some(first)) => {
            state.select(Some(0));
            *selected_id = Some(first.id.clone());
        }
        (None, None) => {
            state.select(None);
            *selected_id = None;
        }
    }
}

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;
