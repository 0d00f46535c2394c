use crate::{Listener, Result};
use std::fmt;

/// The host tree-manipulation capabilities the renderer is built on.
///
/// A `Document` is a cheap, cloneable handle. Component instances keep a
/// clone so that they can rebuild their subtree whenever their state changes.
///
/// Two implementations ship with this crate: [`WebDocument`][crate::WebDocument]
/// for a browser's DOM, and [`MemoryDocument`][crate::MemoryDocument], an
/// in-memory tree for tests and benchmarks.
pub trait Document: Clone + 'static {
    /// A handle to a node in this document.
    type Node: Clone + fmt::Debug + 'static;

    /// Create a new, detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Node>;

    /// Create a new, detached text node.
    fn create_text_node(&self, text: &str) -> Self::Node;

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Put `new_child` into `old_child`'s slot under `parent`.
    fn replace_child(
        &self,
        parent: &Self::Node,
        new_child: &Self::Node,
        old_child: &Self::Node,
    ) -> Result<()>;

    /// The node's parent, if it is attached to one.
    fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Set an attribute, as `Element.setAttribute` does.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Assign a property on the node object itself, as `node[name] = value`
    /// does.
    fn set_property(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Install `listener` as the node's `name` event handler property, e.g.
    /// `onclick`, replacing any previous handler.
    fn set_event_handler(&self, node: &Self::Node, name: &str, listener: Listener) -> Result<()>;

    /// Replace the node's whole inline style with the given CSS text.
    fn set_style_text(&self, node: &Self::Node, css: &str) -> Result<()>;

    /// Set a single inline style property.
    fn set_style_property(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Find a connected element by its `id` attribute.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Node>;
}
