//! Menu open/closed state
//!
//! Pure value type; the controller owns the only mutable copy.

use std::fmt;

/// Visibility of the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    /// Menu is visible; the container carries the open class
    Open,
    /// Menu is hidden (initial state on every page load)
    #[default]
    Closed,
}

impl MenuState {
    /// Returns the opposite state
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_menu::state::MenuState;
    ///
    /// assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    /// assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Whether the open CSS class should be present on the container
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

impl From<MenuState> for bool {
    fn from(state: MenuState) -> Self {
        state.is_open()
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
