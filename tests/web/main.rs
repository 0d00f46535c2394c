//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use log::*;
use mini_react::WebDocument;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

pub mod events;
pub mod render;

pub fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn document() -> WebDocument {
    WebDocument::from_window().expect("should have a document on window")
}

/// Create a detached `<div>` to render into.
pub fn create_container() -> web_sys::Node {
    init_logging();
    document()
        .inner()
        .create_element("div")
        .expect("should create element OK")
        .into()
}

/// Ensure that logs go to the devtools console.
pub fn init_logging() {
    use std::sync::Once;
    static START: Once = Once::new();
    START.call_once(|| {
        console_log::init_with_level(Level::Trace).expect("could not initialize console_log");
    });
}

pub fn outer_html(node: &web_sys::Node) -> String {
    let html = node
        .dyn_ref::<web_sys::Element>()
        .map(|el| el.outer_html())
        .unwrap_or_else(|| node.text_content().unwrap_or_default());
    debug!("outer_html = {}", html);
    html
}

pub fn click(node: &web_sys::Node) {
    node.dyn_ref::<web_sys::HtmlElement>()
        .expect("should be an HTML element")
        .click();
}
