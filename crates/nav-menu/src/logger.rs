//! Observer that logs every state transition

use std::cell::RefCell;
use std::rc::Rc;

use crate::console::ConsoleSink;
use crate::error::Result;
use crate::observer::MenuObserver;
use crate::state::MenuState;

/// Writes "Menu state: open/closed" for each notification and keeps a history.
///
/// Clones share the console and the history, so a caller can keep one handle
/// and register another with the controller.
#[derive(Clone)]
pub struct MenuLogger {
    console: Rc<dyn ConsoleSink>,
    history: Rc<RefCell<Vec<MenuState>>>,
}

impl MenuLogger {
    #[must_use]
    pub fn new(console: Rc<dyn ConsoleSink>) -> Self {
        Self {
            console,
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// States received so far, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<MenuState> {
        self.history.borrow().clone()
    }

    /// Most recently received state
    #[must_use]
    pub fn last(&self) -> Option<MenuState> {
        self.history.borrow().last().copied()
    }

    /// Line written for `state`
    #[must_use]
    pub fn format_line(state: MenuState) -> String {
        format!("Menu state: {state}")
    }
}

impl MenuObserver for MenuLogger {
    fn update(&self, state: MenuState) -> Result<()> {
        self.console.log(&Self::format_line(state));
        self.history.borrow_mut().push(state);
        Ok(())
    }

    fn name(&self) -> &str {
        "menu-logger"
    }
}

impl std::fmt::Debug for MenuLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuLogger")
            .field("history", &self.history.borrow())
            .finish_non_exhaustive()
    }
}
