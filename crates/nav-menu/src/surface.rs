//! The seam between the controller and the rendered menu
//!
//! [`crate::dom::DomMenu`] implements this over real elements; tests use an
//! in-memory double.

use crate::error::Result;

/// Rendered menu: a container plus its toggle control
pub trait MenuSurface {
    /// What a click lands on (a DOM node in the browser)
    type Target;

    /// Adds or removes the open class on the container
    ///
    /// # Errors
    ///
    /// Returns `NavError::Dom` if the mutation is rejected.
    fn set_open(&self, open: bool) -> Result<()>;

    /// Whether the container currently carries the open class
    fn is_open(&self) -> bool;

    /// Whether `target` lies inside the container or inside the toggle
    fn contains(&self, target: &Self::Target) -> bool;

    /// Sets the container's CSS `transition`
    ///
    /// # Errors
    ///
    /// Returns `NavError::Dom` if the style cannot be written.
    fn set_transition(&self, transition: &str) -> Result<()>;
}
