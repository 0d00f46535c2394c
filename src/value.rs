//! Dynamic values for attributes, props and state.

use crate::Result;
use std::fmt;
use std::rc::Rc;

/// A dynamically typed value.
///
/// Attributes, component props and component state are all [`Map`]s of
/// `Value`s, so that one element description can carry plain strings,
/// numbers, style objects and event listeners side by side.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integral numbers print without a fractional part.
    Number(f64),
    /// A string.
    String(String),
    /// A nested mapping, e.g. a `style` object.
    Map(Map),
    /// An event listener.
    Listener(Listener),
}

impl Value {
    /// Get this value as a number, if it is one.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Get this value as a nested map, if it is one.
    #[inline]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get this value as an event listener, if it is one.
    #[inline]
    pub fn as_listener(&self) -> Option<&Listener> {
        match self {
            Value::Listener(l) => Some(l),
            _ => None,
        }
    }

    /// Is this `Value::Null`?
    #[inline]
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            _ => false,
        }
    }

    /// The string a DOM attribute would hold for this value.
    ///
    /// Maps and listeners have no sensible attribute form and yield `None`.
    pub fn to_attribute_string(&self) -> Option<String> {
        match self {
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(number_to_string(*n)),
            Value::String(s) => Some(s.clone()),
            Value::Map(_) | Value::Listener(_) => None,
        }
    }
}

/// Format a number the way the host would when converting it to a string:
/// `2.0` is `"2"`, `2.5` is `"2.5"`, `1e21` is `"1e+21"` and `1e-7` is
/// `"1e-7"`.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        // Covers `-0.0` too.
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // `{:e}` prints the shortest round-tripping mantissa, like the host,
        // but leaves the exponent's sign off when it is positive.
        let s = format!("{:e}", n);
        match s.find('e') {
            Some(i) if !s[i + 1..].starts_with('-') => format!("{}e+{}", &s[..i], &s[i + 1..]),
            _ => s,
        }
    } else {
        n.to_string()
    }
}

impl PartialEq for Value {
    /// Listeners compare by identity, everything else by value.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Listener(a), Value::Listener(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(n: $t) -> Value {
                    Value::Number(n as f64)
                }
            }
        )*
    }
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Map> for Value {
    #[inline]
    fn from(m: Map) -> Value {
        Value::Map(m)
    }
}

impl From<Listener> for Value {
    #[inline]
    fn from(l: Listener) -> Value {
        Value::Listener(l)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(v: Option<T>) -> Value {
        v.map_or(Value::Null, Into::into)
    }
}

/// An insertion-ordered mapping from names to [`Value`]s.
///
/// Inserting an existing key overwrites its value in place, so iteration
/// order is always the order in which keys were first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

/// Attributes of an element description.
pub type Attrs = Map;

/// The props a component instance is constructed with.
pub type Props = Map;

/// A component instance's local state.
pub type State = Map;

impl Map {
    /// Construct a new, empty map.
    #[inline]
    pub fn new() -> Map {
        Map::default()
    }

    /// Insert `value` under `key`, overwriting any previous value for that
    /// key.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Map::insert`].
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Map
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    /// Get the value for `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Does this map have an entry for `key`?
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Shallowly merge `other` into `self`.
    ///
    /// Keys only in `other` are appended, keys in both take `other`'s value,
    /// and keys only in `self` are left alone. Nested maps are replaced, not
    /// merged.
    pub fn merge(&mut self, other: Map) {
        for (k, v) in other.entries {
            self.insert(k, v);
        }
    }

    /// Iterate over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is this map empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Map {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Build a [`Map`] from `key => value` pairs.
///
/// ```
/// use mini_react::map;
///
/// let style = map! { "width" => 20, "color" => "red" };
/// assert_eq!(style.len(), 2);
/// ```
#[macro_export]
macro_rules! map {
    () => { $crate::Map::new() };
    ( $( $k:expr => $v:expr ),+ $(,)* ) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($k, $v);
        )+
        map
    }};
}

/// An event that was dispatched to a node with a listener on it.
#[derive(Clone, Debug)]
pub struct Event {
    kind: String,
    raw: Option<web_sys::Event>,
}

impl Event {
    /// Construct a synthetic event of the given type, e.g. `"click"`.
    #[inline]
    pub fn new<S: Into<String>>(kind: S) -> Event {
        Event {
            kind: kind.into(),
            raw: None,
        }
    }

    #[inline]
    pub(crate) fn from_web(kind: String, raw: web_sys::Event) -> Event {
        Event {
            kind,
            raw: Some(raw),
        }
    }

    /// The event type, such as `"click"`.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The browser's event object, when the event came from a real DOM.
    #[inline]
    pub fn raw(&self) -> Option<&web_sys::Event> {
        self.raw.as_ref()
    }
}

/// An event listener callback.
///
/// Listeners are cheap to clone; clones share the same callback. Whatever
/// error the callback returns is handed back to the code that dispatched the
/// event.
#[derive(Clone)]
pub struct Listener {
    callback: Rc<dyn Fn(&Event) -> Result<()>>,
}

impl Listener {
    /// Invoke this listener with the given event.
    #[inline]
    pub fn call(&self, event: &Event) -> Result<()> {
        (self.callback)(event)
    }

    /// Do `self` and `other` share the same callback?
    #[inline]
    pub fn ptr_eq(&self, other: &Listener) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Rc::as_ptr(&self.callback))
            .finish()
    }
}

/// Create an event listener from the given callback.
///
/// ```
/// use mini_react::{element, map, on};
///
/// let button = element!(
///     "button",
///     map! { "onClick" => on(|_event| Ok(())) },
///     "press me",
/// );
/// # let _ = button;
/// ```
pub fn on<F>(callback: F) -> Listener
where
    F: 'static + Fn(&Event) -> Result<()>,
{
    Listener {
        callback: Rc::new(callback),
    }
}
