//! Test suite that renders into the in-memory document.

use mini_react::{Element, MemoryDocument, Node, NodeId, Tag};

pub mod render;

/// A document with a `<div id="root">` container to render into.
pub fn setup() -> (MemoryDocument, NodeId) {
    let doc = MemoryDocument::new();
    let root = doc.create_container("div", "root");
    (doc, root)
}

/// Assert that `actual` is the host tree `expected` describes.
///
/// Only host elements, text and string-valued attributes are checked; event
/// handlers, styles and `className` are left to the more specific tests.
pub fn assert_rendered(doc: &MemoryDocument, actual: NodeId, expected: &Node) {
    match expected {
        Node::Text(_) | Node::Number(_) => {
            assert!(doc.is_text(actual), "{:?} should be a text node", actual);
            assert_eq!(
                doc.text_content(actual),
                expected.text().unwrap(),
                "text content of {:?}",
                actual
            );
        }
        Node::Element(element) => check_element(doc, actual, element),
    }

    fn check_element(doc: &MemoryDocument, actual: NodeId, expected: &Element) {
        match expected.tag() {
            Tag::Host(tag) => assert_eq!(doc.tag_name(actual).as_deref(), Some(&**tag)),
            Tag::Component(c) => panic!("cannot check component `{}` structurally", c.name()),
        }

        if let Some(attrs) = expected.attrs() {
            for (name, value) in attrs.iter() {
                if name.starts_with("on") || name == "style" || name == "className" {
                    continue;
                }
                assert_eq!(
                    doc.attribute(actual, name),
                    value.to_attribute_string(),
                    "attribute `{}`",
                    name
                );
            }
        }

        let children = doc.children(actual);
        assert_eq!(
            children.len(),
            expected.children().len(),
            "number of children of {}",
            doc.to_html(actual)
        );
        for (child, expected) in children.into_iter().zip(expected.children()) {
            assert_rendered(doc, child, expected);
        }
    }
}
