//! Turning element descriptions into host nodes.
//!
//! There is no diffing here. Mounting materializes a whole tree, and every
//! component re-render materializes the component's whole subtree again and
//! swaps the new root node in for the old one.

use crate::value::number_to_string;
use crate::{Document, Element, Error, Instance, Listener, Node, Result, Tag, Value};
use std::rc::Rc;

/// Materialize `node` and append it to `container`. Returns the created host
/// node.
///
/// ```
/// use mini_react::{element, render, MemoryDocument};
///
/// let doc = MemoryDocument::new();
/// let root = doc.create_container("div", "root");
/// let node = render(&doc, element!("p", None, "hi"), &root).unwrap();
/// assert_eq!(doc.to_html(root), r#"<div id="root"><p>hi</p></div>"#);
/// # let _ = node;
/// ```
pub fn render<D, N>(doc: &D, node: N, container: &D::Node) -> Result<D::Node>
where
    D: Document,
    N: Into<Node>,
{
    let dom = materialize(doc, node.into())?;
    doc.append_child(container, &dom)?;
    Ok(dom)
}

/// Like [`render`], but first looks up the container by its `id`.
pub fn render_into<D, N>(doc: &D, node: N, container_id: &str) -> Result<D::Node>
where
    D: Document,
    N: Into<Node>,
{
    let container = doc
        .get_element_by_id(container_id)
        .ok_or_else(|| Error::MissingContainer(container_id.to_string()))?;
    render(doc, node, &container)
}

/// Re-render a component instance.
///
/// Calls the component's `render`, materializes the result into a brand new
/// host node, and, if the instance already owns a node that is attached to a
/// parent, replaces that node with the new one in the same slot. The new node
/// becomes the instance's base either way.
///
/// Nothing is compared: this rebuilds and swaps every time.
pub fn render_component<D>(instance: &Rc<Instance<D>>) -> Result<D::Node>
where
    D: Document,
{
    let doc = instance.document();
    let new_base = {
        let _rendering = instance.begin_render();
        let element = Instance::render_element(instance)?;
        materialize(doc, element.into())?
    };

    if let Some(old_base) = instance.base() {
        if let Some(parent) = doc.parent_node(&old_base) {
            debug!(
                "`{}`: replacing {:?} with {:?}",
                instance.name(),
                old_base,
                new_base
            );
            doc.replace_child(&parent, &new_base, &old_base)?;
        }
    }

    instance.set_base(new_base.clone());
    Ok(new_base)
}

fn materialize<D>(doc: &D, node: Node) -> Result<D::Node>
where
    D: Document,
{
    match node {
        Node::Text(text) => Ok(doc.create_text_node(&text)),
        Node::Number(n) => Ok(doc.create_text_node(&number_to_string(n))),
        Node::Element(Element {
            tag: Tag::Component(component),
            attrs,
            children,
        }) => {
            if !children.is_empty() {
                trace!(
                    "ignoring {} children of component `{}`",
                    children.len(),
                    component.name()
                );
            }
            let instance = Instance::new(doc.clone(), &component, attrs.unwrap_or_default());
            render_component(&instance)
        }
        Node::Element(Element {
            tag: Tag::Host(tag),
            attrs,
            children,
        }) => {
            let dom = doc.create_element(&tag)?;
            if let Some(attrs) = attrs {
                for (name, value) in attrs {
                    set_attribute(doc, &dom, &name, value)?;
                }
            }
            for child in children {
                let child = materialize(doc, child)?;
                doc.append_child(&dom, &child)?;
            }
            Ok(dom)
        }
    }
}

/// Is `name` an event handler key: `on` followed by at least one word
/// character?
pub(crate) fn is_event_key(name: &str) -> bool {
    name.starts_with("on")
        && name[2..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
}

fn set_attribute<D>(doc: &D, dom: &D::Node, name: &str, value: Value) -> Result<()>
where
    D: Document,
{
    if name == "className" {
        let class = attribute_string(name, &value)?;
        set_class_name(doc, dom, &class)
    } else if is_event_key(name) {
        let listener = into_listener(name, value)?;
        doc.set_event_handler(dom, &name.to_lowercase(), listener)
    } else if name == "style" {
        set_style(doc, dom, value)
    } else {
        let value = attribute_string(name, &value)?;
        doc.set_attribute(dom, name, &value)
    }
}

#[cfg(not(feature = "standard-class-name"))]
fn set_class_name<D: Document>(doc: &D, dom: &D::Node, class: &str) -> Result<()> {
    doc.set_property(dom, "class", class)
}

#[cfg(feature = "standard-class-name")]
fn set_class_name<D: Document>(doc: &D, dom: &D::Node, class: &str) -> Result<()> {
    doc.set_attribute(dom, "class", class)
}

fn set_style<D>(doc: &D, dom: &D::Node, value: Value) -> Result<()>
where
    D: Document,
{
    match value {
        Value::String(css) => doc.set_style_text(dom, &css),
        Value::Map(properties) => {
            for (property, value) in properties {
                let value = match value {
                    Value::Number(n) => format!("{}px", number_to_string(n)),
                    other => attribute_string("style", &other)?,
                };
                doc.set_style_property(dom, &property, &value)?;
            }
            Ok(())
        }
        Value::Null => Err(Error::InvalidAttribute {
            name: "style".to_string(),
            reason: "a style object cannot be null",
        }),
        other => {
            warn!("ignoring `style` value that is neither a string nor a map: {:?}", other);
            Ok(())
        }
    }
}

fn attribute_string(name: &str, value: &Value) -> Result<String> {
    value
        .to_attribute_string()
        .ok_or_else(|| Error::InvalidAttribute {
            name: name.to_string(),
            reason: "maps and listeners have no string form",
        })
}

fn into_listener(name: &str, value: Value) -> Result<Listener> {
    match value {
        Value::Listener(listener) => Ok(listener),
        _ => Err(Error::InvalidAttribute {
            name: name.to_string(),
            reason: "event handlers must be listeners",
        }),
    }
}
