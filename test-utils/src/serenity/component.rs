//! Test factories for creating Serenity message component rows.
//!
//! Rows are deserialized from the JSON Discord attaches to a message, so they carry
//! exactly what an interaction's source message would.

use serenity::all::ActionRow;

/// Discord component type of a user select menu.
pub const USER_SELECT: u8 = 5;
/// Discord component type of a role select menu.
pub const ROLE_SELECT: u8 = 6;
/// Discord component type of a mentionable select menu.
pub const MENTIONABLE_SELECT: u8 = 7;
/// Discord component type of a channel select menu.
pub const CHANNEL_SELECT: u8 = 8;

fn action_row(components: serde_json::Value) -> ActionRow {
    serde_json::from_value(serde_json::json!({
        "type": 1,
        "components": components,
    }))
    .expect("Failed to create test action row - invalid JSON structure")
}

/// Creates a row of primary buttons, one per custom ID.
///
/// # Arguments
/// - `custom_ids` - Custom ID of each button; also used as its label
pub fn create_test_button_row(custom_ids: &[&str]) -> ActionRow {
    let buttons: Vec<serde_json::Value> = custom_ids
        .iter()
        .map(|custom_id| {
            serde_json::json!({
                "type": 2,
                "style": 1,
                "custom_id": custom_id,
                "label": custom_id,
            })
        })
        .collect();

    action_row(serde_json::Value::Array(buttons))
}

/// Creates a row holding a string select menu.
///
/// # Arguments
/// - `custom_id` - Custom ID of the menu
/// - `values` - Option values; the first option is marked as selected by default
pub fn create_test_string_select_row(custom_id: &str, values: &[&str]) -> ActionRow {
    let options: Vec<serde_json::Value> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::json!({
                "label": format!("Option {}", value),
                "value": value,
                "description": null,
                "emoji": null,
                "default": index == 0,
            })
        })
        .collect();

    action_row(serde_json::json!([{
        "type": 3,
        "custom_id": custom_id,
        "options": options,
        "placeholder": "Pick roles",
        "min_values": 0,
        "max_values": values.len(),
        "disabled": false,
    }]))
}

/// Creates a row holding an auto-populated select menu.
///
/// # Arguments
/// - `custom_id` - Custom ID of the menu
/// - `kind` - Component type, one of the `*_SELECT` constants
/// - `channel_types` - Channel types offered by a channel select, empty otherwise
pub fn create_test_select_row(custom_id: &str, kind: u8, channel_types: &[u8]) -> ActionRow {
    action_row(serde_json::json!([{
        "type": kind,
        "custom_id": custom_id,
        "channel_types": channel_types,
        "placeholder": null,
        "min_values": 1,
        "max_values": 1,
        "disabled": false,
    }]))
}

/// Creates a row holding a text input, a component only valid inside modals.
pub fn create_test_text_input_row(custom_id: &str) -> ActionRow {
    action_row(serde_json::json!([{
        "type": 4,
        "custom_id": custom_id,
        "style": 1,
        "label": "Reason",
    }]))
}
