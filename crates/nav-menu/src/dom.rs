//! DOM binding and event wiring
//!
//! Looks up the container and toggle elements, implements [`MenuSurface`]
//! over them, and registers the two click listeners. Listener closures are
//! leaked with `forget()`; they live as long as the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::config::MenuConfig;
use crate::console::ConsoleSink;
use crate::controller::NavigationController;
use crate::error::{NavError, Result};
use crate::surface::MenuSurface;

/// The menu container and toggle found in the page
#[derive(Debug, Clone)]
pub struct DomMenu {
    container: HtmlElement,
    toggle: Element,
    open_class: String,
}

impl DomMenu {
    /// Finds both elements by id.
    ///
    /// # Errors
    ///
    /// Returns `NavError::MissingElement` if either element is absent, or if
    /// the container is not an `HtmlElement` (its style is needed).
    pub fn bind(document: &Document, config: &MenuConfig) -> Result<Self> {
        let container = document
            .get_element_by_id(&config.container_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| NavError::MissingElement {
                role: "container",
                id: config.container_id.clone(),
            })?;

        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| NavError::MissingElement {
                role: "toggle",
                id: config.toggle_id.clone(),
            })?;

        Ok(Self {
            container,
            toggle,
            open_class: config.open_class.clone(),
        })
    }

    #[must_use]
    pub const fn container(&self) -> &HtmlElement {
        &self.container
    }

    #[must_use]
    pub const fn toggle(&self) -> &Element {
        &self.toggle
    }
}

impl MenuSurface for DomMenu {
    type Target = Node;

    fn set_open(&self, open: bool) -> Result<()> {
        self.container
            .class_list()
            .toggle_with_force(&self.open_class, open)
            .map(|_| ())
            .map_err(|e| NavError::Dom(format!("{e:?}")))
    }

    fn is_open(&self) -> bool {
        self.container.class_list().contains(&self.open_class)
    }

    fn contains(&self, target: &Node) -> bool {
        self.container.contains(Some(target)) || self.toggle.contains(Some(target))
    }

    fn set_transition(&self, transition: &str) -> Result<()> {
        self.container
            .style()
            .set_property("transition", transition)
            .map_err(|e| NavError::Dom(format!("{e:?}")))
    }
}

/// Registers the toggle click and document click listeners.
///
/// Call once per controller; [`crate::controller::ControllerSlot`] guarantees
/// that when used from its initializer.
///
/// # Errors
///
/// Returns `NavError::Dom` if the browser refuses a listener.
pub fn attach_listeners(
    controller: &Rc<NavigationController<DomMenu>>,
    document: &Document,
    console: &Rc<dyn ConsoleSink>,
) -> Result<()> {
    let on_toggle = {
        let controller = Rc::clone(controller);
        let console = Rc::clone(console);
        Closure::wrap(Box::new(move |_event: Event| {
            if let Err(e) = controller.toggle_menu() {
                console.error(&format!("Menu toggle failed: {e}"));
            }
        }) as Box<dyn FnMut(Event)>)
    };

    controller
        .surface()
        .toggle()
        .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
        .map_err(|e| NavError::Dom(format!("{e:?}")))?;
    on_toggle.forget();

    let on_document = {
        let controller = Rc::clone(controller);
        let console = Rc::clone(console);
        Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if let Err(e) = controller.handle_outside_click(&target) {
                console.error(&format!("Menu close failed: {e}"));
            }
        }) as Box<dyn FnMut(Event)>)
    };

    document
        .add_event_listener_with_callback("click", on_document.as_ref().unchecked_ref())
        .map_err(|e| NavError::Dom(format!("{e:?}")))?;
    on_document.forget();

    Ok(())
}
