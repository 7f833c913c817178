//! Navigation controller and the slot that owns it
//!
//! The controller is the only writer of [`MenuState`]. It reacts to two
//! triggers, a toggle click and a document click, and fans each change out
//! to its observers before the triggering handler returns.
//!
//! # State machine
//!
//! - `Closed --toggle--> Open`
//! - `Open --toggle--> Closed`
//! - `Open --outside click--> Closed`
//! - outside click while `Closed`, or any click inside the menu: no change
//!
//! All work happens on the browser's event thread, so interior mutability is
//! `Cell`/`RefCell` and nothing here is `Send`.

use std::cell::{Cell, OnceCell, RefCell};
use std::rc::Rc;

use crate::console::ConsoleSink;
use crate::error::Result;
use crate::observer::{MenuObserver, NotifyReport, ObserverList};
use crate::state::MenuState;
use crate::surface::MenuSurface;

/// Owns the open/closed state of one rendered menu
pub struct NavigationController<S: MenuSurface> {
    surface: S,
    state: Cell<MenuState>,
    observers: RefCell<ObserverList>,
    // Registrations made while a notification holds `observers`.
    pending: RefCell<Vec<Box<dyn MenuObserver>>>,
    console: Rc<dyn ConsoleSink>,
}

impl<S: MenuSurface> NavigationController<S> {
    /// Wraps an already-bound surface. The menu starts closed; the surface
    /// is left untouched until the first transition.
    #[must_use]
    pub fn new(surface: S, console: Rc<dyn ConsoleSink>) -> Self {
        Self {
            surface,
            state: Cell::new(MenuState::Closed),
            observers: RefCell::new(ObserverList::new()),
            pending: RefCell::new(Vec::new()),
            console,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// The bound surface (back-reference for decorators)
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of registered observers, including ones queued during a
    /// notification
    #[must_use]
    pub fn observer_count(&self) -> usize {
        let pending = self.pending.borrow().len();
        self.observers
            .try_borrow()
            .map_or(pending, |list| list.len().saturating_add(pending))
    }

    /// Flips the state, updates the open class, and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the class change. State is
    /// left unchanged and nobody is notified in that case.
    pub fn toggle_menu(&self) -> Result<NotifyReport> {
        self.transition_to(self.state().toggled())
    }

    /// Closes the menu if `target` is outside both the container and the
    /// toggle and the menu is open.
    ///
    /// Returns `Ok(None)` when the click is ignored (inside the menu, or the
    /// menu is already closed).
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the class change.
    pub fn handle_outside_click(&self, target: &S::Target) -> Result<Option<NotifyReport>> {
        if self.surface.contains(target) || !self.state().is_open() {
            return Ok(None);
        }

        self.transition_to(MenuState::Closed).map(Some)
    }

    /// Appends an observer; it receives every later transition.
    ///
    /// An observer added from inside `update` is queued and joins the list
    /// once the current delivery finishes, so it does not see the state
    /// being delivered.
    pub fn add_observer(&self, observer: Box<dyn MenuObserver>) {
        match self.observers.try_borrow_mut() {
            Ok(mut list) => list.push(observer),
            Err(_) => self.pending.borrow_mut().push(observer),
        }
    }

    /// Delivers `state` to every observer in registration order.
    pub fn notify_observers(&self, state: MenuState) -> NotifyReport {
        let report = self.observers.borrow().notify(state, self.console.as_ref());
        self.flush_pending();
        report
    }

    /// Moves queued registrations into the list. A nested delivery leaves
    /// them for the outermost one.
    fn flush_pending(&self) {
        if let Ok(mut list) = self.observers.try_borrow_mut() {
            self.pending
                .borrow_mut()
                .drain(..)
                .for_each(|observer| list.push(observer));
        }
    }

    fn transition_to(&self, next: MenuState) -> Result<NotifyReport> {
        self.surface.set_open(next.is_open())?;
        self.state.set(next);
        Ok(self.notify_observers(next))
    }
}

impl<S: MenuSurface> std::fmt::Debug for NavigationController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state.get())
            .field("observers", &self.observers.try_borrow().ok())
            .finish_non_exhaustive()
    }
}

/// Holds the single controller for a page.
///
/// Owned by the composition root. The first [`ControllerSlot::acquire`] runs
/// the initializer (binding and listener wiring); every later call returns
/// the same `Rc` without running it again.
pub struct ControllerSlot<S: MenuSurface> {
    cell: OnceCell<Rc<NavigationController<S>>>,
}

impl<S: MenuSurface> ControllerSlot<S> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the existing controller, or builds one with `init`.
    ///
    /// # Errors
    ///
    /// Propagates the initializer's error. The slot stays empty, so a later
    /// call may retry.
    pub fn acquire<F>(&self, init: F) -> Result<Rc<NavigationController<S>>>
    where
        F: FnOnce() -> Result<Rc<NavigationController<S>>>,
    {
        if let Some(existing) = self.cell.get() {
            return Ok(Rc::clone(existing));
        }

        let controller = init()?;
        Ok(Rc::clone(self.cell.get_or_init(|| controller)))
    }

    /// The controller, if one has been acquired
    #[must_use]
    pub fn get(&self) -> Option<Rc<NavigationController<S>>> {
        self.cell.get().cloned()
    }
}

impl<S: MenuSurface> Default for ControllerSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}
