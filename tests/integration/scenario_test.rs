// tests/integration/scenario_test.rs

//! End-to-end scenarios mixing get, set and delete on one document.

use super::fixtures::{basic_doc, settings_doc};
use super::test_helpers::TestContext;
use dotpath::{AccessorConfig, DotPathError};
use serde_json::json;

#[test]
fn test_basic_scenario() {
    let original = basic_doc();
    let mut ctx = TestContext::new(original.clone());
    let mut dot = ctx.dot();

    assert_eq!(dot.get("a").unwrap(), Some(&original["a"]));

    dot.set("a", json!(2)).unwrap();
    assert_ne!(dot.get("a").unwrap(), Some(&original["a"]));
    assert_eq!(dot.get("a").unwrap(), Some(&json!(2)));

    dot.set("b", json!(2)).unwrap();
    assert_ne!(dot.get("b").unwrap(), Some(&original["b"]));
    assert_eq!(dot.get("b").unwrap(), Some(&json!(2)));

    // Untouched branches are left as they were.
    assert_eq!(dot.get("c").unwrap(), Some(&original["c"]));
}

#[test]
fn test_every_present_key_reads_back() {
    let ctx = TestContext::new(basic_doc());
    let view = ctx.view();
    for (key, value) in ctx.doc.as_object().unwrap() {
        assert_eq!(view.get(key).unwrap(), Some(value));
    }
}

#[test]
fn test_prefixed_settings_editor() {
    let config = AccessorConfig {
        prefix: "settings.".to_string(),
        suffix: ".value".to_string(),
        ..AccessorConfig::default()
    };
    let mut ctx = TestContext::with_config(settings_doc(), config);
    let mut dot = ctx.dot();

    assert_eq!(dot.get("ui.theme").unwrap(), Some(&json!("dark")));
    assert_eq!(dot.get("plugins.1.name").unwrap(), Some(&json!("format")));

    dot.set("ui.font_size", json!(14)).unwrap();
    dot.set("plugins.2.name", json!("test")).unwrap();
    assert_eq!(dot.delete("ui.theme").unwrap(), Some(true));

    assert_eq!(ctx.doc["settings"]["ui"]["font_size"], json!({"value": 14, "default": 12}));
    assert_eq!(ctx.doc["settings"]["ui"]["theme"], json!({"default": "light"}));
    assert_eq!(ctx.doc["settings"]["plugins"][2], json!({"name": {"value": "test"}}));
}

#[test]
fn test_read_only_view_reports_diagnostics() {
    let ctx = TestContext::new(settings_doc());
    let err = ctx.view().get("settings.ui.colour.value").unwrap_err();
    let DotPathError::PathResolution(e) = &err else {
        panic!("Expected PathResolution, got {err:?}");
    };
    assert_eq!(e.segment, "colour");
    assert_eq!(&e.path[e.offset..e.offset + e.segment.len()], "colour");
    assert_eq!(
        err.to_string(),
        "invalid target \"colour\" in \"settings.ui\"\nsettings.ui.colour.value\n            ^"
    );
}

#[test]
fn test_immutable_accessor_leaves_document_untouched() {
    let config = AccessorConfig {
        is_immutable: true,
        ..AccessorConfig::default()
    };
    let mut ctx = TestContext::with_config(basic_doc(), config);
    let mut dot = ctx.dot();

    assert_eq!(dot.set("a", json!(100)).unwrap(), None);
    assert_eq!(dot.set("new.path.0", json!(1)).unwrap(), None);
    assert_eq!(dot.delete("c.d").unwrap(), None);
    assert_eq!(dot.get("c.d").unwrap(), Some(&json!(3)));
    assert_eq!(ctx.doc, basic_doc());
}

#[test]
fn test_config_loaded_from_toml_drives_accessor() {
    let config = AccessorConfig::from_toml_str(
        r#"
        throw_errors = false
        is_expandable = false
        "#,
    )
    .unwrap();
    let mut ctx = TestContext::with_config(basic_doc(), config);
    let mut dot = ctx.dot();

    assert_eq!(dot.set("c.d", json!(4)).unwrap(), Some(&json!(4)));
    assert_eq!(dot.set("c.f", json!(5)).unwrap(), None);
    assert_eq!(dot.set("z.y", json!(6)).unwrap(), None);
    assert_eq!(dot.get("c.f").unwrap(), None);
    assert_eq!(ctx.doc["c"], json!({"d": 4, "e": []}));
}
