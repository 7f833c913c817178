//! Browser integration tests for the full page-load flow
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::rc::Rc;

use nav_menu::console::{BufferSink, ConsoleLevel, ConsoleSink};
use nav_menu::error::NavError;
use nav_menu::factory::MenuVariant;
use nav_menu::{ControllerSlot, MenuConfig, MenuState, bootstrap};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Renders toggle + container (with one link) under unique ids
fn mount(prefix: &str) -> MenuConfig {
    let document = document();
    let body = document.body().unwrap();

    let toggle = document.create_element("button").unwrap();
    toggle.set_id(&format!("{prefix}-toggle"));

    let container = document.create_element("nav").unwrap();
    container.set_id(&format!("{prefix}-menu"));
    let link = document.create_element("a").unwrap();
    link.set_id(&format!("{prefix}-link"));
    container.append_child(&link).unwrap();

    let outside = document.create_element("p").unwrap();
    outside.set_id(&format!("{prefix}-outside"));

    body.append_child(&toggle).unwrap();
    body.append_child(&container).unwrap();
    body.append_child(&outside).unwrap();

    MenuConfig {
        container_id: format!("{prefix}-menu"),
        toggle_id: format!("{prefix}-toggle"),
        ..MenuConfig::default()
    }
}

fn click(id: &str) {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn has_open_class(id: &str) -> bool {
    document()
        .get_element_by_id(id)
        .unwrap()
        .class_list()
        .contains("open")
}

fn sink() -> (BufferSink, Rc<dyn ConsoleSink>) {
    let buffer = BufferSink::new();
    let console: Rc<dyn ConsoleSink> = Rc::new(buffer.clone());
    (buffer, console)
}

#[wasm_bindgen_test]
fn test_page_load_toggle_and_outside_click_scenario() {
    let config = mount("scenario");
    let (buffer, console) = sink();
    let slot = ControllerSlot::new();

    let nav = bootstrap(&slot, &config, &console).unwrap();
    assert_eq!(nav.variant, MenuVariant::Side);
    assert!(!has_open_class("scenario-menu"));

    click("scenario-toggle");
    assert!(has_open_class("scenario-menu"));
    assert_eq!(nav.logger.last(), Some(MenuState::Open));

    click("scenario-outside");
    assert!(!has_open_class("scenario-menu"));
    assert_eq!(nav.logger.history(), vec![MenuState::Open, MenuState::Closed]);

    assert!(
        buffer
            .lines_at(ConsoleLevel::Log)
            .contains(&"Menu state: closed".to_string())
    );
}

#[wasm_bindgen_test]
fn test_click_inside_open_menu_keeps_it_open() {
    let config = mount("inside");
    let (_buffer, console) = sink();
    let slot = ControllerSlot::new();
    let nav = bootstrap(&slot, &config, &console).unwrap();

    click("inside-toggle");
    click("inside-link");

    assert!(has_open_class("inside-menu"));
    assert_eq!(nav.logger.history(), vec![MenuState::Open]);
}

#[wasm_bindgen_test]
fn test_double_toggle_logs_open_then_closed() {
    let config = mount("double");
    let (_buffer, console) = sink();
    let slot = ControllerSlot::new();
    let nav = bootstrap(&slot, &config, &console).unwrap();

    click("double-toggle");
    click("double-toggle");

    assert_eq!(nav.logger.history(), vec![MenuState::Open, MenuState::Closed]);
    assert!(!has_open_class("double-menu"));
}

#[wasm_bindgen_test]
fn test_second_acquisition_adds_no_listeners() {
    let config = mount("repeat");
    let (_buffer, console) = sink();
    let slot = ControllerSlot::new();
    let nav = bootstrap(&slot, &config, &console).unwrap();

    let again = slot
        .acquire(|| Err(NavError::InvalidConfig("initializer must not rerun".to_string())))
        .unwrap();
    assert!(Rc::ptr_eq(&nav.controller, &again));

    click("repeat-toggle");

    assert_eq!(nav.logger.history(), vec![MenuState::Open]);
    assert_eq!(again.state(), MenuState::Open);
}

#[wasm_bindgen_test]
fn test_transition_applied_once_at_startup() {
    let config = mount("anim");
    let (_buffer, console) = sink();
    let slot = ControllerSlot::new();
    let nav = bootstrap(&slot, &config, &console).unwrap();

    let transition = nav
        .controller
        .surface()
        .container()
        .style()
        .get_property_value("transition")
        .unwrap();
    assert!(transition.contains("left"));
}

#[wasm_bindgen_test]
fn test_data_attribute_overrides_variant() {
    let config = mount("override");
    document()
        .get_element_by_id("override-menu")
        .unwrap()
        .set_attribute("data-menu-config", r#"{"variant": "top"}"#)
        .unwrap();
    let (_buffer, console) = sink();
    let slot = ControllerSlot::new();

    let nav = bootstrap(&slot, &config, &console).unwrap();

    assert_eq!(nav.variant, MenuVariant::Top);
    assert_eq!(nav.controller.surface().container().id(), "override-menu");
}

#[wasm_bindgen_test]
fn test_missing_markup_is_configuration_error() {
    let config = MenuConfig {
        container_id: "absent-menu".to_string(),
        toggle_id: "absent-toggle".to_string(),
        ..MenuConfig::default()
    };
    let (_buffer, console) = sink();
    let slot = ControllerSlot::new();

    let result = bootstrap(&slot, &config, &console);

    assert!(matches!(
        result,
        Err(NavError::MissingElement { role: "container", .. })
    ));
    assert!(slot.get().is_none());
}
