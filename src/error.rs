use std::fmt;
use thiserror::Error;

/// Everything that can go wrong while building or updating the host DOM.
///
/// There is no recovery anywhere in the renderer: the first error aborts the
/// render pass and is returned to whoever started it (a `render` call, or a
/// `set_state` call coming from an event listener).
#[derive(Debug, Error)]
pub enum Error {
    /// The host document refused an operation.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// No element with the given `id` exists in the document.
    #[error("no container element with id `{0}`")]
    MissingContainer(String),

    /// A component's `render` returned nothing to materialize.
    #[error("component `{component}` rendered nothing")]
    EmptyRender {
        /// The component's name.
        component: &'static str,
    },

    /// An attribute value has a shape its key does not accept.
    #[error("invalid value for attribute `{name}`: {reason}")]
    InvalidAttribute {
        /// The attribute key as written in the element description.
        name: String,
        /// What was wrong with the value.
        reason: &'static str,
    },

    /// `set_state` was called on an instance while that same instance was
    /// rendering.
    #[error("component `{component}` updated its state while rendering")]
    UpdateDuringRender {
        /// The component's name.
        component: &'static str,
    },
}

impl Error {
    pub(crate) fn dom(e: impl fmt::Debug) -> Error {
        Error::Dom(format!("{:?}", e))
    }
}

/// A `Result` whose error is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
