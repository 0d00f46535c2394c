use crate::{Document, Error, Event, Listener, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A [`Document`] backed by a browser's DOM.
///
/// Properties, inline style entries and `on*` handlers are plain JavaScript
/// property assignments on the node (`node[name] = value`), the same as a
/// script writing them by hand.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Wrap an existing `web_sys::Document`.
    #[inline]
    pub fn new(document: web_sys::Document) -> WebDocument {
        WebDocument { document }
    }

    /// The global `window.document`.
    pub fn from_window() -> Result<WebDocument> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(WebDocument::new)
            .ok_or_else(|| Error::Dom("should have a `document` on the global `window`".into()))
    }

    /// The underlying `web_sys::Document`.
    #[inline]
    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

fn element(node: &web_sys::Node) -> Result<&web_sys::Element> {
    node.dyn_ref::<web_sys::Element>()
        .ok_or_else(|| Error::Dom(format!("{:?} is not an element", node)))
}

fn set(target: &JsValue, name: &str, value: &JsValue) -> Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), value)
        .map(drop)
        .map_err(Error::dom)
}

fn style(node: &web_sys::Node) -> Result<JsValue> {
    let style = js_sys::Reflect::get(element(node)?, &JsValue::from_str("style")).map_err(Error::dom)?;
    if style.is_undefined() || style.is_null() {
        return Err(Error::Dom(format!("{:?} has no inline style", node)));
    }
    Ok(style)
}

impl Document for WebDocument {
    type Node = web_sys::Node;

    fn create_element(&self, tag: &str) -> Result<web_sys::Node> {
        self.document
            .create_element(tag)
            .map(Into::into)
            .map_err(Error::dom)
    }

    fn create_text_node(&self, text: &str) -> web_sys::Node {
        self.document.create_text_node(text).into()
    }

    fn append_child(&self, parent: &web_sys::Node, child: &web_sys::Node) -> Result<()> {
        parent.append_child(child).map(drop).map_err(Error::dom)
    }

    fn replace_child(
        &self,
        parent: &web_sys::Node,
        new_child: &web_sys::Node,
        old_child: &web_sys::Node,
    ) -> Result<()> {
        parent
            .replace_child(new_child, old_child)
            .map(drop)
            .map_err(Error::dom)
    }

    fn parent_node(&self, node: &web_sys::Node) -> Option<web_sys::Node> {
        node.parent_node()
    }

    fn set_attribute(&self, node: &web_sys::Node, name: &str, value: &str) -> Result<()> {
        element(node)?
            .set_attribute(name, value)
            .map_err(Error::dom)
    }

    fn set_property(&self, node: &web_sys::Node, name: &str, value: &str) -> Result<()> {
        set(node, name, &JsValue::from_str(value))
    }

    fn set_event_handler(&self, node: &web_sys::Node, name: &str, listener: Listener) -> Result<()> {
        trace!("installing `{}` handler on {:?}", name, node);
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let event = Event::from_web(event.type_(), event);
            if let Err(e) = listener.call(&event) {
                wasm_bindgen::throw_str(&e.to_string());
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        // Ownership of the closure passes to the JS garbage collector.
        set(node, name, &closure.into_js_value())
    }

    fn set_style_text(&self, node: &web_sys::Node, css: &str) -> Result<()> {
        set(&style(node)?, "cssText", &JsValue::from_str(css))
    }

    fn set_style_property(&self, node: &web_sys::Node, name: &str, value: &str) -> Result<()> {
        set(&style(node)?, name, &JsValue::from_str(value))
    }

    fn get_element_by_id(&self, id: &str) -> Option<web_sys::Node> {
        self.document.get_element_by_id(id).map(Into::into)
    }
}
