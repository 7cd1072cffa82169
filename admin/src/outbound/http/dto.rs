//! Wire-level helpers shared by every admin endpoint.
//!
//! The backend stores records in MongoDB and sends `_id` where the domain
//! expects `id`. Normalisation runs on the raw JSON tree so the domain
//! models stay free of wire aliases.

use serde::Deserialize;
use serde_json::{Map, Value};

const MONGO_ID: &str = "_id";

/// Rename `_id` to `id` throughout `value`.
///
/// An existing `id` wins; `_id` is dropped either way.
pub(crate) fn normalize_ids(value: &mut Value) {
    match value {
        Value::Object(map) => normalize_object(map),
        Value::Array(items) => items.iter_mut().for_each(normalize_ids),
        _ => {}
    }
}

fn normalize_object(map: &mut Map<String, Value>) {
    if let Some(mongo_id) = map.remove(MONGO_ID) {
        map.entry("id").or_insert(mongo_id);
    }
    map.values_mut().for_each(normalize_ids);
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// `message` field of an error body, when present and not blank.
pub(crate) fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}
