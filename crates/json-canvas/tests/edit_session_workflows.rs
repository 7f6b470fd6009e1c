use json_canvas::path::PathStep;
use json_canvas::{
    parse_json, DocumentStore, EditSession, EditTarget, GraphNode, MirrorBuffer, NodeRow, RecordingProjection,
    RowType, SessionError, StoreError, WriteShape,
};
use serde_json::{json, Value};

fn store(json: &str) -> DocumentStore<RecordingProjection> {
    let mut store = DocumentStore::new(RecordingProjection::default());
    store.set_json(json);
    store
}

fn doc(store: &DocumentStore<RecordingProjection>) -> Value {
    parse_json(store.get_json()).expect("canonical text parses")
}

fn node(id: &str, path: Vec<PathStep>, text: Vec<NodeRow>) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        path,
        text,
    }
}

#[test]
fn merge_keys_updates_existing_and_adds_new() {
    let mut s = store(r#"{"a":{"b":1}}"#);
    let mut mirror = MirrorBuffer::default();
    let mut session = EditSession::new();

    session.open(
        node("a", vec![PathStep::from("a")], vec![NodeRow::field("b", json!(1))]),
        None,
        &s,
    );
    assert_eq!(session.buffer(), "{\n  \"b\": 1\n}");

    session.set_buffer(r#"{"b":2,"c":3}"#);
    let shape = session.commit(&mut s, &mut mirror).unwrap();

    assert_eq!(shape, WriteShape::MergeKeys);
    assert_eq!(doc(&s), json!({"a": {"b": 2, "c": 3}}));
    assert!(!session.is_open());
}

#[test]
fn field_target_replaces_one_field_with_type_recovery() {
    let mut s = store(r#"{"x":5}"#);
    let mut mirror = MirrorBuffer::default();
    let mut session = EditSession::new();

    session.open(
        node("root", vec![], vec![NodeRow::field("x", json!(5))]),
        Some(EditTarget::new("x")),
        &s,
    );
    assert_eq!(session.buffer(), "5");

    session.set_buffer("10");
    let shape = session.commit(&mut s, &mut mirror).unwrap();

    assert_eq!(shape, WriteShape::ReplaceField { key: "x".into() });
    assert_eq!(doc(&s), json!({"x": 10}));
    assert_eq!(session.edit_target(), None);
}

#[test]
fn merge_into_user_node_writes_each_key() {
    let mut s = store(r#"{"user":{"name":"Al","age":30,"tags":["a"]}}"#);
    let mut session = EditSession::new();
    session.open(
        node(
            "user",
            vec![PathStep::from("user")],
            vec![
                NodeRow::field("name", json!("Al")),
                NodeRow::field("age", json!(30)),
                NodeRow::container("tags", RowType::Array, 1),
            ],
        ),
        None,
        &s,
    );
    session.set_buffer(r#"{"name":"Bob","age":31}"#);
    session.commit(&mut s, &mut MirrorBuffer::default()).unwrap();

    let d = doc(&s);
    assert_eq!(d["user"]["name"], json!("Bob"));
    assert_eq!(d["user"]["age"], json!(31));
    assert_eq!(d["user"]["tags"], json!(["a"]));
}

#[test]
fn leaf_node_replaces_whole_value() {
    let mut s = store(r#"{"items":[1,"two",3]}"#);
    let mut session = EditSession::new();
    session.open(
        node("i1", vec![PathStep::from("items"), PathStep::Index(1)], vec![NodeRow::leaf(json!("two"))]),
        None,
        &s,
    );
    assert_eq!(session.buffer(), "two");

    session.set_buffer("2");
    assert_eq!(
        session.commit(&mut s, &mut MirrorBuffer::default()).unwrap(),
        WriteShape::ReplaceWhole
    );
    assert_eq!(doc(&s), json!({"items": [1, 2, 3]}));

    session.open(
        node("i2", vec![PathStep::from("items"), PathStep::Index(2)], vec![NodeRow::leaf(json!(3))]),
        None,
        &s,
    );
    session.set_buffer("three");
    session.commit(&mut s, &mut MirrorBuffer::default()).unwrap();
    assert_eq!(doc(&s), json!({"items": [1, 2, "three"]}));
}

#[test]
fn malformed_merge_input_leaves_document_unchanged() {
    let original = r#"{"a":{"b":1,"c":2}}"#;
    let mut s = store(original);
    let mut mirror = MirrorBuffer::default();
    let mut session = EditSession::new();
    session.open(
        node(
            "a",
            vec![PathStep::from("a")],
            vec![NodeRow::field("b", json!(1)), NodeRow::field("c", json!(2))],
        ),
        None,
        &s,
    );

    session.set_buffer("not valid json");
    assert!(matches!(
        session.commit(&mut s, &mut mirror),
        Err(SessionError::StagedText(_))
    ));
    assert_eq!(s.get_json(), original);
    assert_eq!(s.projection().derives, 1);
    assert_eq!(mirror.contents(), "");
}

#[test]
fn commit_syncs_mirror_without_reingest() {
    let mut s = store(r#"{"x":1}"#);
    let mut mirror = MirrorBuffer::default();
    mirror.edit(r#"{"x":1}"#);
    let mut session = EditSession::new();
    session.open(
        node("root", vec![], vec![NodeRow::field("x", json!(1))]),
        Some(EditTarget::new("x")),
        &s,
    );
    session.set_buffer("2");
    session.commit(&mut s, &mut mirror).unwrap();

    assert_eq!(mirror.contents(), s.get_json());
    assert_eq!(mirror.contents(), "{\n  \"x\": 2\n}");
    assert!(!mirror.has_changes());
    assert_eq!(mirror.take_pending(), None);
}

#[test]
fn stale_selection_stages_rows_and_drops_commit() {
    let mut s = store(r#"{"a":{"b":1}}"#);
    let stale = node(
        "old",
        vec![PathStep::from("removed")],
        vec![
            NodeRow::field("b", json!(1)),
            NodeRow::container("nested", RowType::Object, 0),
        ],
    );
    let mut session = EditSession::new();
    session.open(stale, None, &s);
    assert_eq!(session.buffer(), "{\n  \"b\": 1\n}");

    session.set_buffer(r#"{"b":5}"#);
    let res = session.commit(&mut s, &mut MirrorBuffer::default());
    assert!(matches!(res, Err(SessionError::Store(StoreError::Path(_)))));
    assert_eq!(s.get_json(), r#"{"a":{"b":1}}"#);
}

#[test]
fn merge_array_buffer_onto_array_node() {
    let mut s = store(r#"{"xs":[1,2,3]}"#);
    let mut session = EditSession::new();
    session.open(
        node(
            "xs",
            vec![PathStep::from("xs")],
            vec![
                NodeRow::leaf(json!(1)),
                NodeRow::leaf(json!(2)),
                NodeRow::leaf(json!(3)),
            ],
        ),
        None,
        &s,
    );
    assert_eq!(session.buffer(), "[\n  1,\n  2,\n  3\n]");

    session.set_buffer("[10, 20]");
    session.commit(&mut s, &mut MirrorBuffer::default()).unwrap();
    assert_eq!(doc(&s), json!({"xs": [10, 20, 3]}));
}

#[test]
fn edit_after_external_set_json_sees_new_document() {
    let mut s = store(r#"{"a":1}"#);
    s.set_json(r#"{"a":{"deep":true}}"#);
    let mut session = EditSession::new();
    session.open(
        node("a", vec![PathStep::from("a")], vec![NodeRow::field("deep", json!(true))]),
        None,
        &s,
    );
    assert_eq!(session.buffer(), "{\n  \"deep\": true\n}");
}

#[test]
fn edits_survive_deeply_nested_documents() {
    let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let mut s = store(&format!(r#"{{"d":{deep},"x":1}}"#));
    let mut session = EditSession::new();

    session.open(
        node("root", vec![], vec![NodeRow::field("x", json!(1))]),
        Some(EditTarget::new("x")),
        &s,
    );
    session.set_buffer("2");
    session.commit(&mut s, &mut MirrorBuffer::default()).unwrap();
    assert_eq!(doc(&s)["x"], json!(2));

    session.open(
        node("root", vec![], vec![NodeRow::field("x", json!(2))]),
        None,
        &s,
    );
    session.set_buffer(&format!(r#"{{"x":{deep}}}"#));
    assert_eq!(
        session.commit(&mut s, &mut MirrorBuffer::default()).unwrap(),
        WriteShape::MergeKeys
    );
    let d = doc(&s);
    assert!(d["x"].is_array());
    assert_eq!(d["x"], d["d"]);
}
