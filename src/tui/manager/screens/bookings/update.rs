//! MB Bookings タブの update（状態更新）

use super::model::{status_options, Model, Msg};
use crate::tui::manager::core::DataStore;

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg, data: &DataStore) {
    match msg {
        Msg::Up => move_selection(model, data, -1),
        Msg::Down => move_selection(model, data, 1),
        Msg::PrevDay => {
            if let Some(date) = model.date.pred_opt() {
                model.date = date;
            }
        }
        Msg::NextDay => {
            if let Some(date) = model.date.succ_opt() {
                model.date = date;
            }
        }
        Msg::ResetDate => {
            model.date = data.default_date;
        }
        Msg::NextStatus => {
            let options = status_options();
            let current = options
                .iter()
                .position(|s| *s == model.status)
                .unwrap_or(0);
            model.status = options[(current + 1) % options.len()].clone();
            clamp_selection(model, data);
        }
        Msg::ToggleNewBooking => {
            model.new_booking_open = !model.new_booking_open;
        }
    }
}

/// 選択を移動（端で止まる）
fn move_selection(model: &mut Model, data: &DataStore, delta: isize) {
    let filtered = data.filtered_bookings(&model.query, &model.status);
    if filtered.is_empty() {
        return;
    }
    let current = model.state.selected().unwrap_or(0);
    let next = current
        .saturating_add_signed(delta)
        .min(filtered.len() - 1);
    model.state.select(Some(next));
    model.selected_id = Some(filtered[next].id.clone());
}

/// 絞り込み条件の変更後に選択状態を整合させる
pub fn clamp_selection(model: &mut Model, data: &DataStore) {
    let filtered = data.filtered_bookings(&model.query, &model.status);
    let position = model
        .selected_id
        .as_ref()
        .and_then(|id| filtered.iter().position(|b| &b.id == id));

    match (position, filtered.first()) {
        (Some(idx), _) => model.state.select(Some(idx)),
        (None, Some(first)) => {
            model.state.select(Some(0));
            model.selected_id = Some(first.id.clone());
        }
        (None, None) => {
            model.state.select(None);
            model.selected_id = None;
        }
    }
}

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;
