//! A counter whose state starts at `props.number` and goes up on every click.

use log::*;
use mini_react::{
    component, element, map, on, render_into, Component, Element, Props, RenderContext, State,
    Value, WebDocument,
};
use wasm_bindgen::prelude::*;

#[derive(Default)]
struct App;

impl Component for App {
    fn initial_state(&self, props: &Props) -> State {
        map! { "number" => props.get("number").cloned().unwrap_or(Value::Number(0.0)) }
    }

    fn render(&self, cx: &RenderContext) -> Option<Element> {
        let updater = cx.updater().clone();
        let number = cx.state().get("number")?.as_f64()?;
        Some(element!(
            "div",
            map! {
                "style" => map! { "fontSize" => 32, "cursor" => "pointer" },
                "onClick" => on(move |_event| {
                    info!("clicked at {}", number);
                    updater.set_state(map! { "number" => number + 1.0 })
                }),
            },
            number,
        ))
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Trace).expect("should initialize logging OK");

    let doc = WebDocument::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    render_into(&doc, element!(component::<App>(), map! { "number" => 2 }), "root")
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}
