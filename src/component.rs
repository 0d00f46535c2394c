use crate::{render, Document, Element, Error, Props, Result, State};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// A stateful rendering component.
///
/// `render` is the only thing a component has to provide. Props and state
/// live in the component's instance, not in the implementing type, and are
/// handed to `render` through the [`RenderContext`].
///
/// ## Example
///
/// ```
/// use mini_react::{element, map, on, Component, Element, Props, RenderContext, State, Value};
///
/// #[derive(Default)]
/// struct Counter;
///
/// impl Component for Counter {
///     fn initial_state(&self, props: &Props) -> State {
///         map! { "count" => props.get("start").cloned().unwrap_or(Value::Number(0.0)) }
///     }
///
///     fn render(&self, cx: &RenderContext) -> Option<Element> {
///         let updater = cx.updater().clone();
///         let count = cx.state().get("count").and_then(Value::as_f64).unwrap_or(0.0);
///         Some(element!(
///             "button",
///             map! {
///                 "onClick" => on(move |_event| {
///                     updater.set_state(map! { "count" => count + 1.0 })
///                 }),
///             },
///             count,
///         ))
///     }
/// }
/// ```
pub trait Component: 'static {
    /// The state a new instance starts with. Defaults to an empty map.
    fn initial_state(&self, _props: &Props) -> State {
        State::new()
    }

    /// Describe this component's current output.
    ///
    /// Returning `None` makes rendering fail with [`Error::EmptyRender`].
    fn render(&self, cx: &RenderContext) -> Option<Element>;
}

/// A reference to a component type, used as an element's tag.
#[derive(Clone, Copy)]
pub struct ComponentRef {
    name: &'static str,
    construct: fn(&Props) -> Box<dyn Component>,
}

impl ComponentRef {
    /// Create a component reference from a name and a constructor that is
    /// given the element's attributes as props.
    #[inline]
    pub fn new(name: &'static str, construct: fn(&Props) -> Box<dyn Component>) -> ComponentRef {
        ComponentRef { name, construct }
    }

    /// A component reference that constructs `C` with `Default`.
    pub fn of<C>() -> ComponentRef
    where
        C: Component + Default,
    {
        fn construct<C>(_props: &Props) -> Box<dyn Component>
        where
            C: Component + Default,
        {
            Box::new(C::default())
        }

        let name = std::any::type_name::<C>();
        let name = name.rsplit("::").next().unwrap_or(name);
        ComponentRef {
            name,
            construct: construct::<C>,
        }
    }

    /// The component's name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("name", &self.name)
            .finish()
    }
}

/// What a component's `render` can see: its props, its current state, and
/// the capability to update that state.
pub struct RenderContext<'a> {
    props: &'a Props,
    state: &'a State,
    updater: &'a Updater,
}

impl<'a> RenderContext<'a> {
    /// The props this instance was constructed with.
    #[inline]
    pub fn props(&self) -> &'a Props {
        self.props
    }

    /// This instance's current state.
    #[inline]
    pub fn state(&self) -> &'a State {
        self.state
    }

    /// The capability to update this instance's state. Clone it into event
    /// listeners.
    #[inline]
    pub fn updater(&self) -> &'a Updater {
        self.updater
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("props", &self.props)
            .field("state", &self.state)
            .finish()
    }
}

trait Stateful {
    fn set_state(self: Rc<Self>, change: State) -> Result<()>;
    fn state(&self) -> State;
    fn name(&self) -> &'static str;
}

/// A handle to one component instance that can update its state.
///
/// The renderer gives every instance its own updater. Holding an updater keeps
/// the instance alive.
#[derive(Clone)]
pub struct Updater {
    inner: Rc<dyn Stateful>,
}

impl Updater {
    /// Shallowly merge `change` into the instance's state, then synchronously
    /// re-render the instance, replacing its host node.
    ///
    /// Every call rebuilds, even when nothing actually changed.
    #[inline]
    pub fn set_state(&self, change: State) -> Result<()> {
        Rc::clone(&self.inner).set_state(change)
    }

    /// A snapshot of the instance's current state.
    #[inline]
    pub fn state(&self) -> State {
        self.inner.state()
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Updater")
            .field("component", &self.inner.name())
            .finish()
    }
}

/// A live component instance.
///
/// An instance owns its props, its state, and the single host node it most
/// recently rendered (its *base*).
pub struct Instance<D: Document> {
    name: &'static str,
    component: Box<dyn Component>,
    props: Props,
    state: RefCell<State>,
    base: RefCell<Option<D::Node>>,
    rendering: Cell<bool>,
    doc: D,
}

impl<D: Document> Instance<D> {
    /// Construct an instance of the referenced component. Nothing is rendered
    /// yet.
    pub fn new(doc: D, component: &ComponentRef, props: Props) -> Rc<Instance<D>> {
        let name = component.name;
        let component = (component.construct)(&props);
        let state = component.initial_state(&props);
        debug!("constructed `{}` with props {:?}", name, props);
        Rc::new(Instance {
            name,
            component,
            props,
            state: RefCell::new(state),
            base: RefCell::new(None),
            rendering: Cell::new(false),
            doc,
        })
    }

    /// The component's name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The props this instance was constructed with.
    #[inline]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// A snapshot of the current state.
    #[inline]
    pub fn state(&self) -> State {
        self.state.borrow().clone()
    }

    /// The host node this instance currently owns, if it has rendered.
    #[inline]
    pub fn base(&self) -> Option<D::Node> {
        self.base.borrow().clone()
    }

    /// The document this instance renders into.
    #[inline]
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// This instance's updater.
    pub fn updater(this: &Rc<Instance<D>>) -> Updater {
        Updater {
            inner: Rc::clone(this) as Rc<dyn Stateful>,
        }
    }

    /// Shallowly merge `change` into the state and re-render.
    pub fn set_state(this: &Rc<Instance<D>>, change: State) -> Result<()> {
        if this.rendering.get() {
            return Err(Error::UpdateDuringRender {
                component: this.name,
            });
        }
        debug!("`{}`.set_state({:?})", this.name, change);
        this.state.borrow_mut().merge(change);
        render::render_component(this).map(drop)
    }

    /// Mark the instance as rendering until the returned guard is dropped.
    pub(crate) fn begin_render(&self) -> RenderingGuard<'_> {
        self.rendering.set(true);
        RenderingGuard(&self.rendering)
    }

    /// Run the component's `render` against the current props and state.
    pub(crate) fn render_element(this: &Rc<Instance<D>>) -> Result<Element> {
        let updater = Instance::updater(this);
        let state = this.state.borrow();
        let cx = RenderContext {
            props: &this.props,
            state: &*state,
            updater: &updater,
        };
        this.component.render(&cx).ok_or(Error::EmptyRender {
            component: this.name,
        })
    }

    pub(crate) fn set_base(&self, node: D::Node) {
        *self.base.borrow_mut() = Some(node);
    }
}

impl<D: Document> Stateful for Instance<D> {
    fn set_state(self: Rc<Self>, change: State) -> Result<()> {
        Instance::set_state(&self, change)
    }

    fn state(&self) -> State {
        Instance::state(self)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<D: Document> fmt::Debug for Instance<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Instance")
            .field("name", &self.name)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("base", &self.base)
            .finish()
    }
}

pub(crate) struct RenderingGuard<'a>(&'a Cell<bool>);

impl Drop for RenderingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
