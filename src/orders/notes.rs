use serde_json::{Map, Value};

pub const MAX_NOTE_KEY_LENGTH: usize = 45;
pub const MAX_NOTE_VALUE_LENGTH: usize = 256;
pub const MAX_NOTES: usize = 15;

/// Bounded metadata block attached to a payment order. Ordered: the first
/// entry is always `formType`, the rest follow payload insertion order.
pub type NoteMap = Map<String, Value>;

fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Renders any JSON value to a note-safe string. Never fails: nulls become
/// empty strings, non-strings degrade to their JSON text.
fn sanitise_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => truncate_chars(s, MAX_NOTE_VALUE_LENGTH),
        other => {
            let text = serde_json::to_string(other).unwrap_or_else(|_| other.to_string());
            truncate_chars(&text, MAX_NOTE_VALUE_LENGTH)
        }
    }
}

/// Builds the notes sent to the gateway from a booking form payload.
///
/// Seeds the map with `formType`, then copies payload entries in insertion
/// order until the map holds [`MAX_NOTES`] entries; the rest are dropped.
/// Keys are cut to [`MAX_NOTE_KEY_LENGTH`] characters (an empty key becomes
/// `"field"`), values to [`MAX_NOTE_VALUE_LENGTH`].
pub fn build_notes(form_type: &str, payload: &Map<String, Value>) -> NoteMap {
    let mut notes = NoteMap::new();
    notes.insert(
        "formType".to_string(),
        Value::String(form_type.to_string()),
    );

    for (key, raw_value) in payload {
        if notes.len() >= MAX_NOTES {
            break;
        }

        let safe_key = truncate_chars(key, MAX_NOTE_KEY_LENGTH);
        let safe_key = if safe_key.is_empty() {
            "field".to_string()
        } else {
            safe_key
        };

        notes.insert(safe_key, Value::String(sanitise_value(raw_value)));
    }

    notes
}
