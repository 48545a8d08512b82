use leptos::*;
use shared::{AccordionConfig, ItemState, ItemToggle};

use crate::components::{Accordion, AccordionPanel, Body};

const DEMO_CONFIG: &str = r#"{
    "class": "demo-accordion",
    "closed_class": "demo-accordion--closed",
    "default_active_items": [1],
    "scroll_into_view": true
}"#;

fn demo_config() -> AccordionConfig {
    match AccordionConfig::from_json(DEMO_CONFIG) {
        Ok(report) => {
            for warning in &report.warnings {
                log::warn!("demo configuration: {warning}");
            }
            report.config
        }
        Err(e) => {
            log::error!("demo configuration rejected: {e}");
            AccordionConfig::default()
        }
    }
}

fn demo_panels() -> Vec<AccordionPanel> {
    let first = AccordionPanel::new(
        "Title 0",
        Body::dynamic(|state: ItemState| {
            view! {
                <div class="demo-description">
                    {if state.is_active { "Open" } else { "Closed" }}
                </div>
            }
        }),
    )
    .title_view(|| view! { <div class="demo-title">"Title 0"</div> });

    let mut panels = vec![first];
    panels.extend((1..=3).map(|index| {
        AccordionPanel::new(
            format!("Title {index}"),
            Body::view(move || {
                view! { <div class="demo-description">{format!("This is the item {index}.")}</div> }
            }),
        )
    }));
    panels
}

/// Demo page showing a single accordion.
#[component]
pub fn DemoApp() -> impl IntoView {
    let on_item_toggling = Callback::new(|(index, toggle): (usize, ItemToggle)| {
        log::info!("toggling item {index}: active = {}", toggle.active);
    });
    let on_item_toggle = Callback::new(|(index, toggle): (usize, ItemToggle)| {
        log::info!("item {index} {}", if toggle.active { "opened" } else { "closed" });
    });

    view! {
        <main class="demo">
            <h1>"accordion"</h1>
            <Accordion
                panels=demo_panels()
                config=demo_config()
                on_item_toggling=on_item_toggling
                on_item_toggle=on_item_toggle
            />
        </main>
    }
}
