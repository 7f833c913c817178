//! Menu variant factory
//!
//! Variants carry no behavior of their own, so they are a plain enum rather
//! than a type per placement.

use std::fmt;
use std::str::FromStr;

use crate::console::ConsoleSink;
use crate::error::{NavError, Result};

/// Placement of the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuVariant {
    /// Slides in from the side
    Side,
    /// Drops down from the top
    Top,
}

impl MenuVariant {
    /// Tag string accepted by [`create_menu`]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Side => "side",
            Self::Top => "top",
        }
    }
}

impl fmt::Display for MenuVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MenuVariant {
    type Err = NavError;

    /// Tags are matched exactly; `"Side"` is not `"side"`.
    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "side" => Ok(Self::Side),
            "top" => Ok(Self::Top),
            other => Err(NavError::UnknownVariant(other.to_string())),
        }
    }
}

/// Creates the variant named by `tag` and logs a creation notice.
///
/// # Errors
///
/// Returns `NavError::UnknownVariant` for any tag other than `"side"` or
/// `"top"`. Nothing is logged in that case.
///
/// # Examples
///
/// ```
/// use nav_menu::console::BufferSink;
/// use nav_menu::factory::{create_menu, MenuVariant};
///
/// let console = BufferSink::new();
/// assert_eq!(create_menu("top", &console)?, MenuVariant::Top);
/// assert!(create_menu("bogus", &console).is_err());
/// # Ok::<(), nav_menu::error::NavError>(())
/// ```
pub fn create_menu(tag: &str, console: &dyn ConsoleSink) -> Result<MenuVariant> {
    let variant = tag.parse::<MenuVariant>()?;
    console.log(&format!("Created {variant} menu"));
    Ok(variant)
}
