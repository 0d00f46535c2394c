use super::{create_container, document, outer_html};
use mini_react::{component, element, map, render, Component, Element, RenderContext};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

#[derive(Default)]
struct Text;

impl Component for Text {
    fn render(&self, cx: &RenderContext) -> Option<Element> {
        let text = cx.props().get("text")?.as_str()?.to_string();
        Some(element!("div", None, text))
    }
}

#[derive(Default)]
struct HelloWorld;

impl Component for HelloWorld {
    fn render(&self, _cx: &RenderContext) -> Option<Element> {
        Some(element!(
            "div",
            None,
            element!(component::<Text>(), map! { "text" => "Hello" }),
            element!(component::<Text>(), map! { "text" => "World" }),
        ))
    }
}

#[wasm_bindgen_test]
fn render_initial_text() {
    let container = create_container();
    let node = render(&document(), "hello", &container).unwrap();
    assert_eq!(node.node_name().to_uppercase(), "#TEXT");
    assert_eq!(node.text_content().unwrap_or_default(), "hello");
}

#[wasm_bindgen_test]
fn render_initial_node() {
    let container = create_container();
    render(
        &document(),
        element!(
            "div",
            map! { "id" => "hello-world" },
            "Hello ",
            element!("span", None, "World!"),
        ),
        &container,
    )
    .unwrap();
    assert_eq!(
        outer_html(&container),
        r#"<div><div id="hello-world">Hello <span>World!</span></div></div>"#
    );
}

#[wasm_bindgen_test]
fn nested_components() {
    let container = create_container();
    render(&document(), element!(component::<HelloWorld>(), None), &container).unwrap();
    assert_eq!(
        outer_html(&container),
        "<div><div><div>Hello</div><div>World</div></div></div>"
    );
}

#[wasm_bindgen_test]
fn style_map_uses_pixels() {
    let container = create_container();
    let node = render(
        &document(),
        element!("div", map! { "style" => map! { "width" => 20, "color" => "red" } }),
        &container,
    )
    .unwrap();
    let style = node
        .dyn_ref::<web_sys::Element>()
        .unwrap()
        .get_attribute("style")
        .unwrap_or_default();
    assert!(style.contains("width: 20px"), "style = {}", style);
    assert!(style.contains("color: red"), "style = {}", style);
}

#[wasm_bindgen_test]
fn style_string_is_css_text() {
    let container = create_container();
    let node = render(
        &document(),
        element!("div", map! { "style" => "height: 3px;" }),
        &container,
    )
    .unwrap();
    let style = node
        .dyn_ref::<web_sys::Element>()
        .unwrap()
        .get_attribute("style")
        .unwrap_or_default();
    assert_eq!(style, "height: 3px;");
}

#[cfg(not(feature = "standard-class-name"))]
#[wasm_bindgen_test]
fn class_name_is_a_property_not_an_attribute() {
    let container = create_container();
    let node = render(
        &document(),
        element!("div", map! { "className" => "box" }),
        &container,
    )
    .unwrap();
    let el = node.dyn_ref::<web_sys::Element>().unwrap();
    assert_eq!(el.get_attribute("class"), None);
    let class = js_sys::Reflect::get(&node, &"class".into()).unwrap();
    assert_eq!(class.as_string().as_deref(), Some("box"));
}
