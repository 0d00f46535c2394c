//! A tiny declarative UI library.
//!
//! Three pieces work together:
//!
//! * [`create_element`] (and the [`element!`] macro) build plain element
//!   descriptions: a tag, optional attributes, and children.
//! * [`Component`]s compute an element description from their props and
//!   local state. [`Updater::set_state`] merges a state change and re-renders.
//! * [`render`] materializes a description into a host [`Document`], and
//!   [`render_component`] rebuilds one component instance in place.
//!
//! There is no diffing. Every state change rebuilds the component's subtree
//! from scratch and swaps the new root node in for the old one.
//!
//! ## Example
//!
//! ```
//! use mini_react::{
//!     component, element, map, on, render_into, Component, Element, MemoryDocument, Props,
//!     RenderContext, State, Value,
//! };
//!
//! #[derive(Default)]
//! struct App;
//!
//! impl Component for App {
//!     fn initial_state(&self, props: &Props) -> State {
//!         map! { "number" => props.get("number").cloned().unwrap_or(Value::Number(0.0)) }
//!     }
//!
//!     fn render(&self, cx: &RenderContext) -> Option<Element> {
//!         let updater = cx.updater().clone();
//!         let number = cx.state().get("number")?.as_f64()?;
//!         Some(element!(
//!             "div",
//!             map! {
//!                 "onClick" => on(move |_| updater.set_state(map! { "number" => number + 1.0 })),
//!             },
//!             number,
//!         ))
//!     }
//! }
//!
//! let doc = MemoryDocument::new();
//! let root = doc.create_container("div", "root");
//! let app = render_into(&doc, element!(component::<App>(), map! { "number" => 2 }), "root").unwrap();
//! assert_eq!(doc.text_content(app), "2");
//!
//! doc.dispatch(app, "click").unwrap();
//! let updated = doc.children(root)[0];
//! assert_ne!(updated, app);
//! assert_eq!(doc.text_content(updated), "3");
//! ```

#![deny(missing_docs, missing_debug_implementations)]

#[macro_use]
mod logging;

mod component;
mod document;
mod element;
mod error;
mod memory;
mod render;
mod value;
mod web;

// Re-export items at the top level.
pub use self::component::{Component, ComponentRef, Instance, RenderContext, Updater};
pub use self::document::Document;
pub use self::element::{component, create_element, Element, Node, Tag};
pub use self::error::{Error, Result};
pub use self::memory::{MemoryDocument, NodeId};
pub use self::render::{render, render_component, render_into};
pub use self::value::{on, Attrs, Event, Listener, Map, Props, State, Value};
pub use self::web::WebDocument;
