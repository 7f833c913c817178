//! In-memory doubles for native tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{NavError, Result};
use crate::observer::MenuObserver;
use crate::state::MenuState;
use crate::surface::MenuSurface;

/// Where a simulated click lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeTarget {
    Container,
    Toggle,
    Outside,
}

/// Surface that tracks the open class and transition in memory
#[derive(Debug, Default)]
pub struct FakeMenu {
    open: Cell<bool>,
    class_writes: Cell<usize>,
    transition: RefCell<Option<String>>,
    reject_writes: bool,
}

impl FakeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose class and style writes always fail
    pub fn rejecting() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub fn class_writes(&self) -> usize {
        self.class_writes.get()
    }

    pub fn transition(&self) -> Option<String> {
        self.transition.borrow().clone()
    }
}

impl MenuSurface for FakeMenu {
    type Target = FakeTarget;

    fn set_open(&self, open: bool) -> Result<()> {
        if self.reject_writes {
            return Err(NavError::Dom("classList is read-only".to_string()));
        }
        self.open.set(open);
        self.class_writes.set(self.class_writes.get().saturating_add(1));
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open.get()
    }

    fn contains(&self, target: &FakeTarget) -> bool {
        !matches!(target, FakeTarget::Outside)
    }

    fn set_transition(&self, transition: &str) -> Result<()> {
        if self.reject_writes {
            return Err(NavError::Dom("style is read-only".to_string()));
        }
        *self.transition.borrow_mut() = Some(transition.to_string());
        Ok(())
    }
}

/// Shared record of (observer name, state) deliveries
pub type Journal = Rc<RefCell<Vec<(String, MenuState)>>>;

/// Observer that appends every delivery to a shared journal
#[derive(Debug, Clone)]
pub struct RecordingObserver {
    name: String,
    journal: Journal,
}

impl RecordingObserver {
    pub fn journal() -> Journal {
        Rc::new(RefCell::new(Vec::new()))
    }

    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: Rc::clone(journal),
        }
    }
}

impl MenuObserver for RecordingObserver {
    fn update(&self, state: MenuState) -> Result<()> {
        self.journal.borrow_mut().push((self.name.clone(), state));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Observer that always fails
#[derive(Debug, Clone, Copy)]
pub struct FailingObserver;

impl MenuObserver for FailingObserver {
    fn update(&self, state: MenuState) -> Result<()> {
        Err(NavError::ObserverFailed {
            observer: self.name().to_string(),
            reason: format!("refused {state}"),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}
