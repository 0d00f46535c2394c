use crate::component::{Component, ComponentRef};
use crate::value::{number_to_string, Attrs};
use std::borrow::Cow;
use std::fmt;
use std::iter;

/// What an element description renders as.
#[derive(Clone)]
pub enum Tag {
    /// A plain host element, such as `"div"`.
    Host(Cow<'static, str>),
    /// A component, instantiated with the element's attributes as its props.
    Component(ComponentRef),
}

impl Tag {
    /// The tag name, or the component's name.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Tag::Host(name) => &**name,
            Tag::Component(c) => c.name(),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tag::Host(name) => f.debug_tuple("Host").field(name).finish(),
            Tag::Component(c) => f.debug_tuple("Component").field(&c.name()).finish(),
        }
    }
}

impl From<&'static str> for Tag {
    #[inline]
    fn from(name: &'static str) -> Tag {
        Tag::Host(Cow::Borrowed(name))
    }
}

impl From<String> for Tag {
    #[inline]
    fn from(name: String) -> Tag {
        Tag::Host(Cow::Owned(name))
    }
}

impl From<ComponentRef> for Tag {
    #[inline]
    fn from(c: ComponentRef) -> Tag {
        Tag::Component(c)
    }
}

/// A description of one element: its tag, attributes and children.
///
/// Element descriptions are plain data. They are built fresh for every render
/// and are never mutated after construction.
#[derive(Clone, Debug)]
pub struct Element {
    pub(crate) tag: Tag,
    pub(crate) attrs: Option<Attrs>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// This element's tag.
    #[inline]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// This element's attributes, if it was given any.
    #[inline]
    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    /// This element's children, in order.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A child in an element description: a primitive or another element.
#[derive(Clone, Debug)]
pub enum Node {
    /// A string, rendered as a text node.
    Text(String),
    /// A number, rendered as a text node holding its string form.
    Number(f64),
    /// A nested element.
    Element(Element),
}

impl Node {
    /// The text a text node for this child would contain, or `None` if this
    /// is an element.
    pub fn text(&self) -> Option<Cow<str>> {
        match self {
            Node::Text(s) => Some(Cow::Borrowed(s)),
            Node::Number(n) => Some(Cow::Owned(number_to_string(*n))),
            Node::Element(_) => None,
        }
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(s: &str) -> Node {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    #[inline]
    fn from(s: String) -> Node {
        Node::Text(s)
    }
}

macro_rules! impl_from_number {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Node {
                #[inline]
                fn from(n: $t) -> Node {
                    Node::Number(n as f64)
                }
            }
        )*
    }
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Element> for Node {
    #[inline]
    fn from(e: Element) -> Node {
        Node::Element(e)
    }
}

/// A node can become an iterator that yields the node itself once, so a
/// single child can be passed wherever a list of children is expected.
impl IntoIterator for Node {
    type Item = Node;
    type IntoIter = iter::Once<Node>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self)
    }
}

/// Create an element description.
///
/// `tag` is either a host tag name or a [`ComponentRef`]. Nothing is checked
/// here: a bad description only fails once it is rendered.
///
/// ```
/// use mini_react::{create_element, Node};
///
/// let greeting = create_element(
///     "p",
///     None,
///     vec![
///         Node::from("Hello, "),
///         Node::from(create_element("strong", None, vec![Node::from("World")])),
///     ],
/// );
/// assert_eq!(greeting.tag().name(), "p");
/// assert_eq!(greeting.children().len(), 2);
/// ```
pub fn create_element<T, A, C>(tag: T, attrs: A, children: C) -> Element
where
    T: Into<Tag>,
    A: Into<Option<Attrs>>,
    C: IntoIterator<Item = Node>,
{
    Element {
        tag: tag.into(),
        attrs: attrs.into(),
        children: children.into_iter().collect(),
    }
}

/// Variadic [`create_element`]: every argument after the attributes is a
/// child and is converted with `Into<Node>`.
///
/// ```
/// use mini_react::element;
///
/// let e = element!("div", None, "hello ", element!("span", None, "world!"));
/// assert_eq!(e.children().len(), 2);
/// ```
#[macro_export]
macro_rules! element {
    ( $tag:expr, $attrs:expr $(,)* ) => {
        $crate::create_element($tag, $attrs, ::std::vec::Vec::<$crate::Node>::new())
    };
    ( $tag:expr, $attrs:expr, $( $child:expr ),+ $(,)* ) => {
        $crate::create_element(
            $tag,
            $attrs,
            ::std::vec![ $( $crate::Node::from($child) ),+ ],
        )
    };
}

/// Shorthand for a component reference to `C`, for use as a tag.
#[inline]
pub fn component<C>() -> ComponentRef
where
    C: Component + Default,
{
    ComponentRef::of::<C>()
}
