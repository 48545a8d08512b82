//! DOM helpers shared by the browser tests.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

/// Mounts `f` into a fresh container appended to `<body>`.
pub fn mount<F, N>(f: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = document();
    let root: HtmlElement = document
        .create_element("div")
        .expect("create test root")
        .unchecked_into();
    document
        .body()
        .expect("document body")
        .append_child(&root)
        .expect("attach test root");
    mount_to(root.clone(), f);
    root
}

pub fn find(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into()
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_name().split_whitespace().any(|c| c == class)
}

/// Dispatches a bubbling `keydown` for `key` on `el`.
pub fn press(el: &HtmlElement, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    el.dispatch_event(&event).expect("dispatch keydown");
}

/// `aria-label` of the focused element.
pub fn focused_label() -> Option<String> {
    document()
        .active_element()
        .and_then(|el| el.get_attribute("aria-label"))
}

/// Lets queued effects and zero-length animations run.
pub async fn tick() {
    TimeoutFuture::new(0).await;
}
