// tests/integration/fixtures.rs

//! Common documents reused across integration tests.

use serde_json::{Value, json};

/// The small mixed document used by the basic scenario.
pub fn basic_doc() -> Value {
    json!({
        "a": 1,
        "b": [2],
        "c": {
            "d": 3,
            "e": [],
        }
    })
}

/// A settings tree with a shared prefix and leaf suffix.
pub fn settings_doc() -> Value {
    json!({
        "settings": {
            "ui": {
                "theme": {"value": "dark", "default": "light"},
                "font_size": {"value": 12, "default": 12},
            },
            "plugins": [
                {"name": {"value": "lint"}},
                {"name": {"value": "format"}},
            ],
        }
    })
}

/// A document whose sequence contains `null` placeholders.
pub fn sparse_doc() -> Value {
    json!({"a": [null, null, 3]})
}
