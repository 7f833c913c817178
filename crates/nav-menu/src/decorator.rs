//! Transition decorator
//!
//! Sets the container's CSS `transition` once at startup. Opening and closing
//! afterwards only flip the open class; the browser runs the transition.

use crate::config::DEFAULT_TRANSITION;
use crate::error::Result;
use crate::surface::MenuSurface;

/// Borrows a surface and applies a transition description to it
#[derive(Debug)]
pub struct AnimatedMenu<'a, S: MenuSurface> {
    menu: &'a S,
    transition: String,
}

impl<'a, S: MenuSurface> AnimatedMenu<'a, S> {
    /// Uses the default `left 0.5s ease-in-out` transition
    #[must_use]
    pub fn new(menu: &'a S) -> Self {
        Self::with_transition(menu, DEFAULT_TRANSITION)
    }

    #[must_use]
    pub fn with_transition(menu: &'a S, transition: &str) -> Self {
        Self {
            menu,
            transition: transition.to_string(),
        }
    }

    /// The transition this decorator applies
    #[must_use]
    pub fn transition(&self) -> &str {
        &self.transition
    }

    /// Writes the transition onto the menu container.
    ///
    /// # Errors
    ///
    /// Returns `NavError::Dom` if the style cannot be written.
    pub fn animate_open(&self) -> Result<()> {
        self.menu.set_transition(&self.transition)
    }
}
