//! WASM entry point
//!
//! Mounts the menu markup, then wires the controller to it.

use std::rc::Rc;

use leptos::prelude::*;
use nav_menu::console::{BrowserConsole, ConsoleSink};
use nav_menu::{App, ControllerSlot, MenuConfig, bootstrap};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    });

    let console: Rc<dyn ConsoleSink> = Rc::new(BrowserConsole);
    let slot = ControllerSlot::new();

    if let Err(e) = bootstrap(&slot, &MenuConfig::default(), &console) {
        console.error(&format!("Navigation menu setup failed: {e}"));
    }
}
