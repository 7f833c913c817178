//! Menu markup components
//!
//! `MenuShell` renders the container and toggle the controller binds to.
//! Pages that ship their own markup can skip it and only run the bootstrap.

use leptos::prelude::*;

use crate::config::MenuConfig;

/// Links rendered inside the menu container
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

/// Hamburger toggle plus navigation container
///
/// Ids come from the configuration so the rendered markup always matches
/// what [`crate::dom::DomMenu::bind`] looks for.
#[component]
pub fn MenuShell(#[prop(optional)] config: Option<MenuConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    view! {
        <header class="site-header">
            <button
                id=config.toggle_id.clone()
                class="hamburger"
                type="button"
                aria-label="Toggle navigation"
                aria-controls=config.container_id.clone()
            >
                <span class="hamburger-bar"></span>
                <span class="hamburger-bar"></span>
                <span class="hamburger-bar"></span>
            </button>
            <nav id=config.container_id class="nav-menu">
                <ul class="nav-list">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a href={*href}>{*label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

/// Root component mounted by the binary
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <MenuShell />
            <main class="app-main">
                <h1>"Navigation"</h1>
            </main>
        </div>
    }
}
