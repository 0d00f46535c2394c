//! A component rendering two instances of another component with different
//! props.

use log::*;
use mini_react::{
    component, element, map, render_into, Component, Element, RenderContext, WebDocument,
};
use wasm_bindgen::prelude::*;

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

/// Shows its `text` prop.
#[derive(Default)]
struct Text;

impl Component for Text {
    fn render(&self, cx: &RenderContext) -> Option<Element> {
        let text = cx.props().get("text")?.as_str()?.to_string();
        Some(element!("div", None, text))
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Trace).expect("should initialize logging OK");

    let doc = WebDocument::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let node = render_into(&doc, element!(component::<HelloWorld>(), None), "root")
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    debug!("mounted {:?}", node);
    Ok(())
}
