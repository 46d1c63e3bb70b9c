use hierdiff_engine::diff_configs;
use serde_json::Value;

#[test]
fn json_output_nests_context_in_insertion_order() {
    let diff = diff_configs(
        "router bgp 65000\n  neighbor 10.0.0.1 remote-as 1\n  neighbor 10.0.0.2 remote-as 1\n",
        "router bgp 65000\n  neighbor 10.0.0.1 remote-as 9\n  neighbor 10.0.0.2 remote-as 9\n",
    )
    .expect("diff succeeds");

    let value = serde_json::to_value(&diff).expect("serialize diff");
    let obj = value.as_object().expect("diff should be object");
    assert!(obj.contains_key("text"));
    assert!(obj.contains_key("old_context"));
    assert!(obj.contains_key("new_context"));
    assert_eq!(obj.get("has_changes"), Some(&Value::Bool(true)));

    let old_context = obj
        .get("old_context")
        .and_then(Value::as_object)
        .expect("old context object");
    let children = old_context
        .get("router bgp 65000")
        .and_then(Value::as_object)
        .expect("parent maps to nested children");

    let keys = children.keys().cloned().collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec![
            "  neighbor 10.0.0.1 remote-as 1".to_string(),
            "  neighbor 10.0.0.2 remote-as 1".to_string(),
        ]
    );

    // Changed leaves have no recorded children of their own.
    for leaf in children.values() {
        assert_eq!(leaf, &Value::Object(serde_json::Map::new()));
    }
}

#[test]
fn annotated_text_interleaves_change_and_hint_lines() {
    let diff = diff_configs(
        "router bgp 1\n  neighbor 1.1.1.1 remote-as 1\n",
        "router bgp 1\n  neighbor 1.1.1.1 remote-as 2\n",
    )
    .expect("diff succeeds");

    let lines = diff.text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "  router bgp 1");
    assert_eq!(lines[1], "-   neighbor 1.1.1.1 remote-as 1");
    assert!(lines[2].starts_with("? "));
    assert_eq!(lines[3], "+   neighbor 1.1.1.1 remote-as 2");
    assert!(lines[4].starts_with("? "));
}
