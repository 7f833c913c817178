//! Hamburger navigation menu for Leptos 0.7 CSR
//!
//! A toggle button opens and closes a navigation container by flipping a CSS
//! class. Any click outside both elements closes an open menu. Every
//! transition is fanned out to registered observers, one of which logs it to
//! the browser console.
//!
//! ## Architecture
//! - Pure CSR with Leptos 0.7, compiled to `wasm32-unknown-unknown`
//! - The controller is generic over [`surface::MenuSurface`], so its state
//!   machine runs natively in tests against an in-memory surface
//! - One controller per page, held by a [`controller::ControllerSlot`] owned
//!   by the composition root (no global statics)
//!
//! ## Module Structure
//! - `app`: Leptos components rendering the menu markup
//! - `bootstrap`: page-load composition
//! - `config`: ids, class, transition and variant settings
//! - `console`: console sinks (browser and in-memory)
//! - `controller`: open/closed state machine and controller slot
//! - `decorator`: one-shot transition style
//! - `dom`: web-sys binding and click listeners
//! - `factory`: menu variants
//! - `logger`: console-logging observer
//! - `observer`: observer trait and best-effort fan-out
//! - `state`: the `MenuState` value type
//! - `surface`: the controller/markup seam
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod console;
pub mod controller;
pub mod decorator;
pub mod dom;
pub mod error;
pub mod factory;
pub mod logger;
pub mod observer;
pub mod state;
pub mod surface;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests;

pub use app::App;
pub use bootstrap::{Navigation, bootstrap};
pub use config::MenuConfig;
pub use controller::{ControllerSlot, NavigationController};
pub use error::{NavError, Result};
pub use state::MenuState;
