//! A plain element tree with a click handler on each element.

use log::*;
use mini_react::{element, map, on, render_into, WebDocument};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Trace).expect("should initialize logging OK");

    let element = element!(
        "div",
        map! {
            "onClick" => on(|_event| {
                info!("hello");
                Ok(())
            }),
        },
        "hello ",
        element!(
            "span",
            map! {
                "onClick" => on(|_event| {
                    info!("world");
                    Ok(())
                }),
            },
            "world!",
        ),
    );

    let doc = WebDocument::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    render_into(&doc, element, "root").map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}
