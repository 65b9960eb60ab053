use super::*;
use crate::models::about::Stat;

#[test]
fn test_valid_json_array_is_parsed() {
    let list = lenient_string_list(Some(r#"["5kg capacity", "IP67 rated"]"#));

    assert_eq!(list, vec!["5kg capacity", "IP67 rated"]);
}

#[test]
fn test_malformed_json_falls_back_to_comma_split() {
    let list = lenient_string_list(Some("not json"));

    assert_eq!(list, vec!["not json"]);
}

#[test]
fn test_comma_split_trims_entries() {
    let list = lenient_string_list(Some("one, two , three"));

    assert_eq!(list, vec!["one", "two", "three"]);
}

#[test]
fn test_missing_and_empty_inputs_yield_empty_list() {
    assert!(lenient_string_list(None).is_empty());
    assert!(lenient_string_list(Some("")).is_empty());
    assert!(lenient_string_list(Some("   ")).is_empty());
}

#[test]
fn test_non_string_array_items_are_stringified() {
    let list = lenient_string_list(Some(r#"["ok", 42]"#));

    assert_eq!(list, vec!["ok", "42"]);
}

#[test]
fn test_lenient_json_list_parses_structured_items() {
    let stats: Vec<Stat> =
        lenient_json_list(Some(r#"[{"value": 25, "label": "Years in business"}]"#));

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].label, "Years in business");
}

#[test]
fn test_lenient_json_list_swallows_malformed_input() {
    let stats: Vec<Stat> = lenient_json_list(Some("not json"));

    assert!(stats.is_empty());
}

#[test]
fn test_shallow_merge_overwrites_and_preserves() {
    let mut base = serde_json::json!({ "name": "old", "price": 100, "category": "sensors" });
    let patch = serde_json::json!({ "name": "new", "showPrice": false });

    shallow_merge(&mut base, &patch);

    assert_eq!(base["name"], "new");
    assert_eq!(base["price"], 100);
    assert_eq!(base["showPrice"], false);
    assert_eq!(base["category"], "sensors");
}

#[test]
fn test_shallow_merge_keeps_explicit_nulls() {
    let mut base = serde_json::json!({ "logoData": { "key": "logo/1.png" } });
    let patch = serde_json::json!({ "logoData": null });

    shallow_merge(&mut base, &patch);

    assert!(base["logoData"].is_null());
}
