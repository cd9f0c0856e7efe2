use md2doc::{Block, Config, Document, ListItem, convert, markdown_to_json, markdown_to_json_with_config};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn wire(markdown: &str) -> Value {
    serde_json::to_value(convert(markdown)).unwrap()
}

fn text(value: &str) -> Value {
    json!({ "type": "text", "text": value })
}

fn paragraph(value: &str) -> Value {
    json!({ "type": "paragraph", "content": [text(value)] })
}

fn item(value: &str) -> Value {
    json!({ "type": "listItem", "content": [paragraph(value)] })
}

#[test]
fn test_empty_document() {
    assert_eq!(
        wire(""),
        json!({ "version": 1, "type": "doc", "content": [] })
    );
}

#[test]
fn test_bullet_list() {
    assert_eq!(
        wire("- a\n- b"),
        json!({
            "version": 1,
            "type": "doc",
            "content": [
                { "type": "bulletList", "content": [item("a"), item("b")] }
            ]
        })
    );
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        wire("1. a\n2. b"),
        json!({
            "version": 1,
            "type": "doc",
            "content": [
                { "type": "orderedList", "content": [item("a"), item("b")] }
            ]
        })
    );
}

#[test]
fn test_mixed_document() {
    let markdown = "Intro line\n\n- first\n- second\n1. step one\n2. step two\n\nOutro";
    assert_eq!(
        wire(markdown),
        json!({
            "version": 1,
            "type": "doc",
            "content": [
                paragraph("Intro line"),
                { "type": "bulletList", "content": [item("first"), item("second")] },
                { "type": "orderedList", "content": [item("step one"), item("step two")] },
                paragraph("Outro"),
            ]
        })
    );
}

#[test]
fn test_document_reads_back_from_wire() {
    let value = json!({
        "version": 1,
        "type": "doc",
        "content": [
            paragraph("hello"),
            { "type": "bulletList", "content": [item("item")] },
        ]
    });

    let doc: Document = serde_json::from_value(value).unwrap();
    assert_eq!(
        doc,
        Document::new(vec![
            Block::paragraph("hello"),
            Block::BulletList {
                content: vec![ListItem::text("item")],
            },
        ])
    );
}

#[test]
fn test_unknown_block_type_is_rejected() {
    let value = json!({
        "version": 1,
        "type": "doc",
        "content": [{ "type": "heading", "content": [] }]
    });
    assert!(serde_json::from_value::<Document>(value).is_err());
}

#[test]
fn test_root_with_wrong_type_is_rejected() {
    let value = json!({ "version": 1, "type": "paragraph", "content": [] });
    assert!(serde_json::from_value::<Document>(value).is_err());

    let untyped = json!({ "version": 1, "content": [] });
    assert!(serde_json::from_value::<Document>(untyped).is_err());
}

#[test]
fn test_root_with_other_version_is_rejected() {
    let value = json!({ "version": 7, "type": "doc", "content": [] });
    let err = serde_json::from_value::<Document>(value).unwrap_err();
    assert!(err.to_string().contains("unsupported document version 7"));

    let mismatched = json!({ "version": 7, "type": "paragraph", "content": [] });
    assert!(serde_json::from_value::<Document>(mismatched).is_err());
}

#[test]
fn test_mislabelled_list_item_is_rejected() {
    let value = json!({
        "version": 1,
        "type": "doc",
        "content": [
            { "type": "bulletList", "content": [paragraph("not an item")] }
        ]
    });
    assert!(serde_json::from_value::<Document>(value).is_err());
}

#[test]
fn test_markdown_to_json_default_is_pretty() {
    let json = markdown_to_json("hello").unwrap();
    assert!(json.contains('\n'));
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, wire("hello"));
}

#[test]
fn test_frontmatter_only_stripped_when_configured() {
    let markdown = "---\ntitle: Notes\n---\n- a";

    let mut config = Config::compiled_default();
    config.output.pretty = false;
    let kept: Value =
        serde_json::from_str(&markdown_to_json_with_config(markdown, &config).unwrap()).unwrap();
    assert_eq!(kept["content"][0], paragraph("---"));

    config.input.strip_frontmatter = true;
    let stripped: Value =
        serde_json::from_str(&markdown_to_json_with_config(markdown, &config).unwrap()).unwrap();
    assert_eq!(
        stripped["content"],
        json!([{ "type": "bulletList", "content": [item("a")] }])
    );
}
