//! State-change observers
//!
//! Observers are notified in registration order. Delivery is best-effort:
//! each `update` call is isolated, so a failing observer is reported and the
//! remaining observers still receive the state.

use crate::console::ConsoleSink;
use crate::error::{NavError, Result};
use crate::state::MenuState;

/// Receiver of menu state changes
pub trait MenuObserver {
    /// Handles a new state
    ///
    /// # Errors
    ///
    /// Implementations return an error when they could not handle the
    /// notification. The error is reported, not propagated.
    fn update(&self, state: MenuState) -> Result<()>;

    /// Label used when reporting failures
    fn name(&self) -> &str {
        "observer"
    }
}

/// One failed delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverFailure {
    /// Registration position of the failing observer
    pub position: usize,
    /// What the observer returned
    pub error: NavError,
}

/// Outcome of notifying every registered observer about one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyReport {
    /// The state that was delivered
    pub state: MenuState,
    /// Number of observers that handled it
    pub delivered: usize,
    /// Observers that returned an error
    pub failures: Vec<ObserverFailure>,
}

impl NotifyReport {
    /// True if every observer handled the state
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of observers the state was offered to
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.delivered.saturating_add(self.failures.len())
    }
}

/// Ordered, append-only list of observers
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Box<dyn MenuObserver>>,
}

impl ObserverList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer. Duplicates are allowed and notified twice.
    pub fn push(&mut self, observer: Box<dyn MenuObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers `state` to every observer in registration order.
    ///
    /// Failures are written to `console` as errors and collected in the
    /// report; they never stop delivery to later observers.
    pub fn notify(&self, state: MenuState, console: &dyn ConsoleSink) -> NotifyReport {
        let failures: Vec<ObserverFailure> = self
            .observers
            .iter()
            .enumerate()
            .filter_map(|(position, observer)| {
                observer.update(state).err().map(|error| {
                    console.error(&format!(
                        "Observer #{position} ({}) failed on {state}: {error}",
                        observer.name()
                    ));
                    ObserverFailure { position, error }
                })
            })
            .collect();

        NotifyReport {
            state,
            delivered: self.observers.len().saturating_sub(failures.len()),
            failures,
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|o| o.name()))
            .finish()
    }
}
