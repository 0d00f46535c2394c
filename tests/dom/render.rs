use super::{assert_rendered, setup};
use mini_react::{element, map, on, render, render_into, Error, Node};

#[test]
fn render_initial_text() {
    let (doc, root) = setup();
    let text = render(&doc, "hello", &root).unwrap();
    assert!(doc.is_text(text));
    assert_eq!(doc.text_content(text), "hello");
    assert_eq!(doc.children(root), vec![text]);
}

#[test]
fn render_initial_number() {
    let (doc, root) = setup();
    let whole = render(&doc, 2, &root).unwrap();
    let fraction = render(&doc, 0.25, &root).unwrap();
    assert_eq!(doc.text_content(whole), "2");
    assert_eq!(doc.text_content(fraction), "0.25");
}

#[test]
fn render_extreme_numbers() {
    let (doc, root) = setup();
    let big = render(&doc, 1e21, &root).unwrap();
    let tiny = render(&doc, 1e-7, &root).unwrap();
    assert_eq!(doc.text_content(big), "1e+21");
    assert_eq!(doc.text_content(tiny), "1e-7");
}

#[test]
fn render_initial_node() {
    let (doc, root) = setup();
    let hello = element!(
        "div",
        map! { "id" => "hello-world" },
        "Hello ",
        element!("span", None, "World!"),
    );
    let div = render(&doc, hello.clone(), &root).unwrap();
    assert_rendered(&doc, div, &Node::from(hello));
    assert_eq!(
        doc.to_html(root),
        r#"<div id="root"><div id="hello-world">Hello <span>World!</span></div></div>"#
    );
}

#[test]
fn render_returns_the_appended_node() {
    let (doc, root) = setup();
    let p = render(&doc, element!("p", None), &root).unwrap();
    assert_eq!(doc.parent(p), Some(root));
    assert_eq!(doc.children(root).last(), Some(&p));
}

#[test]
fn hello_world_scenario() {
    let (doc, root) = setup();
    let element = element!(
        "div",
        map! { "onClick" => on(|_| Ok(())) },
        "hello ",
        element!("span", map! { "onClick" => on(|_| Ok(())) }, "world!"),
    );
    let div = render_into(&doc, element, "root").unwrap();

    assert_eq!(doc.parent(div), Some(root));
    assert_eq!(doc.tag_name(div).as_deref(), Some("div"));
    assert!(doc.has_event_handler(div, "onclick"));

    let children = doc.children(div);
    assert_eq!(children.len(), 2);
    assert!(doc.is_text(children[0]));
    assert_eq!(doc.text_content(children[0]), "hello ");
    assert_eq!(doc.tag_name(children[1]).as_deref(), Some("span"));
    assert!(doc.has_event_handler(children[1], "onclick"));
    assert_eq!(doc.text_content(children[1]), "world!");
    assert_eq!(doc.children(children[1]).len(), 1);
}

#[test]
fn attribute_policy() {
    let (doc, root) = setup();
    let node = render(
        &doc,
        element!(
            "label",
            map! {
                "className" => "field",
                "for" => "name",
                "tabindex" => 3,
                "style" => map! { "marginTop" => 4, "color" => "blue" },
                "onMouseOver" => on(|_| Ok(())),
            },
        ),
        &root,
    )
    .unwrap();

    #[cfg(not(feature = "standard-class-name"))]
    assert_eq!(doc.property(node, "class").as_deref(), Some("field"));
    #[cfg(feature = "standard-class-name")]
    assert_eq!(doc.attribute(node, "class").as_deref(), Some("field"));

    assert_eq!(doc.attribute(node, "for").as_deref(), Some("name"));
    assert_eq!(doc.attribute(node, "tabindex").as_deref(), Some("3"));
    assert_eq!(doc.style_property(node, "marginTop").as_deref(), Some("4px"));
    assert_eq!(doc.style_property(node, "color").as_deref(), Some("blue"));
    assert!(doc.has_event_handler(node, "onmouseover"));
}

#[test]
fn style_text() {
    let (doc, root) = setup();
    let node = render(
        &doc,
        element!("div", map! { "style" => "width: 10px; height: 5px" }),
        &root,
    )
    .unwrap();
    assert_eq!(doc.style_text(node), "width: 10px; height: 5px;");
}

#[test]
fn bad_attribute_fails_the_whole_render() {
    let (doc, root) = setup();
    let result = render(
        &doc,
        element!(
            "div",
            None,
            element!("button", map! { "onClick" => 1 }),
        ),
        &root,
    );
    assert!(matches!(result, Err(Error::InvalidAttribute { .. })));
    assert!(doc.children(root).is_empty());
}

#[test]
fn bad_tag_fails() {
    let (doc, root) = setup();
    let result = render(&doc, element!("not a tag", None), &root);
    assert!(matches!(result, Err(Error::Dom(_))));
}

#[test]
fn missing_container() {
    let doc = mini_react::MemoryDocument::new();
    match render_into(&doc, "x", "root") {
        Err(Error::MissingContainer(id)) => assert_eq!(id, "root"),
        other => panic!("expected a missing container, got {:?}", other),
    }
}
