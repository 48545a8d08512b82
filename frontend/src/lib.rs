pub mod animation;
pub mod app;
pub mod components;
pub mod focus;

#[cfg(test)]
pub(crate) mod testing;

pub use components::{Accordion, AccordionItem, AccordionPanel, Body};
pub use shared::{AccordionConfig, ConfigWarning, ItemOptions, ItemState, ItemToggle};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed.
    drop(console_log::init_with_level(log::Level::Debug));
    leptos::mount_to_body(app::DemoApp);
}
