//! Page-load composition
//!
//! Acquires the controller (binding elements and wiring listeners on first
//! use), applies the transition style once, creates the configured variant,
//! and registers the logger last so a failed step leaves no observer behind.

use std::rc::Rc;

use crate::config::MenuConfig;
use crate::console::ConsoleSink;
use crate::controller::{ControllerSlot, NavigationController};
use crate::decorator::AnimatedMenu;
use crate::dom::{DomMenu, attach_listeners};
use crate::error::{NavError, Result};
use crate::factory::{MenuVariant, create_menu};
use crate::logger::MenuLogger;
use crate::surface::MenuSurface;

/// Everything the bootstrap put together
#[derive(Debug, Clone)]
pub struct Navigation {
    /// The page's controller
    pub controller: Rc<NavigationController<DomMenu>>,
    /// Handle to the registered logger
    pub logger: MenuLogger,
    /// Variant chosen by configuration
    pub variant: MenuVariant,
}

/// Returns the browser document.
///
/// # Errors
///
/// Returns `NavError::NoWindow` / `NavError::NoDocument` outside a browser.
pub fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .ok_or(NavError::NoWindow)?
        .document()
        .ok_or(NavError::NoDocument)
}

/// Wires the menu for this page. Call once per page load: listeners are
/// only wired on the slot's first acquisition, but each call registers
/// another logger.
///
/// # Errors
///
/// Returns an error if the document or either element is missing, if the
/// configured variant is unknown, or if a listener or style write is refused.
pub fn bootstrap(
    slot: &ControllerSlot<DomMenu>,
    config: &MenuConfig,
    console: &Rc<dyn ConsoleSink>,
) -> Result<Navigation> {
    let document = document()?;
    let config = config.clone().validate()?.with_overrides_from(&document)?;

    let controller = slot.acquire(|| {
        let menu = DomMenu::bind(&document, &config)?;
        let controller = Rc::new(NavigationController::new(menu, Rc::clone(console)));
        attach_listeners(&controller, &document, console)?;
        Ok(controller)
    })?;

    let (logger, variant) = decorate(&*controller, &config, console)?;

    Ok(Navigation {
        controller,
        logger,
        variant,
    })
}

/// Applies the transition, creates the variant, then registers a logger.
///
/// # Errors
///
/// Returns an error if the style write is refused or the variant tag is
/// unknown; no logger is registered in either case.
pub fn decorate<S: MenuSurface>(
    controller: &NavigationController<S>,
    config: &MenuConfig,
    console: &Rc<dyn ConsoleSink>,
) -> Result<(MenuLogger, MenuVariant)> {
    AnimatedMenu::with_transition(controller.surface(), &config.transition).animate_open()?;

    let variant = create_menu(&config.variant, console.as_ref())?;

    let logger = MenuLogger::new(Rc::clone(console));
    controller.add_observer(Box::new(logger.clone()));

    Ok((logger, variant))
}
