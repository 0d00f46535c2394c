//! An in-memory host document.
//!
//! `MemoryDocument` keeps a little DOM-like tree in a `Vec` arena. It is meant
//! for tests and benchmarks, not for long-running applications.
//!
//! Nodes are never freed: a replaced node stays in the arena, detached, so
//! that its identity and contents can still be inspected. Event handlers keep
//! their component instances alive, and instances keep a handle to the
//! document, so the whole tree lives until the process ends. Use a fresh
//! document per test or per benchmark batch.

use crate::{Document, Error, Event, Listener, Result};
use fxhash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A handle to a node in a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug)]
enum NodeKind {
    Element(String),
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(String, String)>,
    properties: FxHashMap<String, String>,
    style: Vec<(String, String)>,
    handlers: FxHashMap<String, Listener>,
}

impl NodeData {
    fn new(kind: NodeKind) -> NodeData {
        NodeData {
            kind,
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            properties: FxHashMap::default(),
            style: Vec::new(),
            handlers: FxHashMap::default(),
        }
    }
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<NodeData>,
    body: NodeId,
}

impl Tree {
    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }

    fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0 as usize)
    }

    fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.get(id)
            .ok_or_else(|| Error::Dom(format!("{:?} does not belong to this document", id)))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or_else(|| Error::Dom(format!("{:?} does not belong to this document", id)))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        let node = self.node_mut(id)?;
        match node.kind {
            NodeKind::Element(_) => Ok(node),
            NodeKind::Text(_) => Err(Error::Dom(format!("{:?} is not an element", id))),
        }
    }

    /// Is `ancestor` the same node as `id` or one of its ancestors?
    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.get(id).and_then(|n| n.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Check that `child` may be inserted under `parent`.
    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        if let NodeKind::Text(_) = self.node(parent)?.kind {
            return Err(Error::Dom(format!("cannot insert into text node {:?}", parent)));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(Error::Dom(format!(
                "inserting {:?} under {:?} would create a cycle",
                child, parent
            )));
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Result<()> {
        if let Some(parent) = self.node(id)?.parent {
            self.node_mut(parent)?.children.retain(|c| *c != id);
            self.node_mut(id)?.parent = None;
        }
        Ok(())
    }

    fn text_content(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.get(id) {
            match &node.kind {
                NodeKind::Text(text) => out.push_str(text),
                NodeKind::Element(_) => {
                    for child in &node.children {
                        self.text_content(*child, out);
                    }
                }
            }
        }
    }

    fn html(&self, id: NodeId, out: &mut String) {
        let node = match self.get(id) {
            Some(node) => node,
            None => return,
        };
        match &node.kind {
            NodeKind::Text(text) => out.push_str(&escape(text)),
            NodeKind::Element(tag) => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in &node.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
                }
                if !node.style.is_empty() {
                    out.push_str(&format!(" style=\"{}\"", escape(&style_text(&node.style))));
                }
                out.push('>');
                for child in &node.children {
                    self.html(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn style_text(style: &[(String, String)]) -> String {
    style
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// An in-memory [`Document`] for tests and benchmarks.
///
/// Cloning a `MemoryDocument` gives another handle to the same tree. A fresh
/// document contains a single `<body>` element; only nodes attached below it
/// are found by `get_element_by_id`.
#[derive(Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> MemoryDocument {
        MemoryDocument::new()
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("nodes", &self.tree.borrow().nodes.len())
            .field("body", &self.to_html(self.body()))
            .finish()
    }
}

impl MemoryDocument {
    /// Create a new document with an empty `<body>`.
    pub fn new() -> MemoryDocument {
        let mut tree = Tree {
            nodes: Vec::new(),
            body: NodeId(0),
        };
        tree.body = tree.push(NodeData::new(NodeKind::Element("body".to_string())));
        MemoryDocument {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// The document's `<body>` element.
    #[inline]
    pub fn body(&self) -> NodeId {
        self.tree.borrow().body
    }

    /// Create an element with the given `id` attribute and append it to the
    /// body, ready to be rendered into.
    pub fn create_container(&self, tag: &str, id: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let mut data = NodeData::new(NodeKind::Element(tag.to_string()));
        data.attributes.push(("id".to_string(), id.to_string()));
        let body = tree.body;
        data.parent = Some(body);
        let container = tree.push(data);
        tree.nodes[body.0 as usize].children.push(container);
        container
    }

    /// The lower-case tag name of an element, or `None` for text nodes.
    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        match &self.tree.borrow().get(id)?.kind {
            NodeKind::Element(tag) => Some(tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    /// Is this a text node?
    pub fn is_text(&self, id: NodeId) -> bool {
        match self.tree.borrow().get(id).map(|n| &n.kind) {
            Some(NodeKind::Text(_)) => true,
            _ => false,
        }
    }

    /// The concatenated text of this node and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.tree.borrow().text_content(id, &mut out);
        out
    }

    /// The node's children, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .borrow()
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// The node's parent, if it is attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.borrow().get(id)?.parent
    }

    /// An attribute set with `set_attribute`.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        tree.get(id)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// A property assigned with `set_property`.
    pub fn property(&self, id: NodeId, name: &str) -> Option<String> {
        self.tree.borrow().get(id)?.properties.get(name).cloned()
    }

    /// One inline style property.
    pub fn style_property(&self, id: NodeId, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        tree.get(id)?
            .style
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// The node's whole inline style, as `name: value;` pairs.
    pub fn style_text(&self, id: NodeId) -> String {
        self.tree
            .borrow()
            .get(id)
            .map(|n| style_text(&n.style))
            .unwrap_or_default()
    }

    /// Does the node have an event handler property named `name`, e.g.
    /// `"onclick"`?
    pub fn has_event_handler(&self, id: NodeId, name: &str) -> bool {
        self.tree
            .borrow()
            .get(id)
            .map_or(false, |n| n.handlers.contains_key(name))
    }

    /// Dispatch an event of type `kind` (e.g. `"click"`) at the node by
    /// calling its `on<kind>` handler.
    ///
    /// Returns whether there was a handler to call, or whatever error the
    /// handler returned. Events do not bubble.
    pub fn dispatch(&self, id: NodeId, kind: &str) -> Result<bool> {
        let listener = {
            let tree = self.tree.borrow();
            let handler = format!("on{}", kind);
            tree.node(id)?.handlers.get(&handler).cloned()
        };
        match listener {
            Some(listener) => {
                listener.call(&Event::new(kind))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Serialize a node and its descendants as HTML.
    ///
    /// Properties and event handlers are not part of the markup.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.tree.borrow().html(id, &mut out);
        out
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        if tag.is_empty() || tag.contains(|c: char| c.is_whitespace() || c == '<' || c == '>') {
            return Err(Error::Dom(format!("invalid tag name {:?}", tag)));
        }
        let kind = NodeKind::Element(tag.to_ascii_lowercase());
        Ok(self.tree.borrow_mut().push(NodeData::new(kind)))
    }

    fn create_text_node(&self, text: &str) -> NodeId {
        let kind = NodeKind::Text(text.to_string());
        self.tree.borrow_mut().push(NodeData::new(kind))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        let (parent, child) = (*parent, *child);
        let mut tree = self.tree.borrow_mut();
        tree.check_insert(parent, child)?;
        tree.detach(child)?;
        tree.node_mut(parent)?.children.push(child);
        tree.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn replace_child(&self, parent: &NodeId, new_child: &NodeId, old_child: &NodeId) -> Result<()> {
        let (parent, new_child, old_child) = (*parent, *new_child, *old_child);
        let mut tree = self.tree.borrow_mut();
        if tree.node(old_child)?.parent != Some(parent) {
            return Err(Error::Dom(format!(
                "{:?} is not a child of {:?}",
                old_child, parent
            )));
        }
        if new_child == old_child {
            return Ok(());
        }
        tree.check_insert(parent, new_child)?;
        tree.detach(new_child)?;
        let slot = tree
            .node(parent)?
            .children
            .iter()
            .position(|c| *c == old_child)
            .ok_or_else(|| Error::Dom(format!("{:?} lost track of {:?}", parent, old_child)))?;
        tree.node_mut(parent)?.children[slot] = new_child;
        tree.node_mut(new_child)?.parent = Some(parent);
        tree.node_mut(old_child)?.parent = None;
        Ok(())
    }

    fn parent_node(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let attributes = &mut tree.element_mut(*node)?.attributes;
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some(attr) => attr.1 = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_property(&self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.node_mut(*node)?
            .properties
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_event_handler(&self, node: &NodeId, name: &str, listener: Listener) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.element_mut(*node)?
            .handlers
            .insert(name.to_string(), listener);
        Ok(())
    }

    fn set_style_text(&self, node: &NodeId, css: &str) -> Result<()> {
        let style = css
            .split(';')
            .filter_map(|decl| {
                let mut parts = decl.splitn(2, ':');
                let name = parts.next()?.trim();
                let value = parts.next()?.trim();
                if name.is_empty() {
                    None
                } else {
                    Some((name.to_string(), value.to_string()))
                }
            })
            .collect();
        let mut tree = self.tree.borrow_mut();
        tree.element_mut(*node)?.style = style;
        Ok(())
    }

    fn set_style_property(&self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let style = &mut tree.element_mut(*node)?.style;
        match style.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => style.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        let mut stack = vec![tree.body];
        while let Some(node) = stack.pop() {
            let data = tree.get(node)?;
            if data.attributes.iter().any(|(n, v)| n == "id" && v == id) {
                return Some(node);
            }
            stack.extend(data.children.iter().rev());
        }
        None
    }
}
