use leptos::*;
use shared::classes::{self, ClassList};
use shared::{ItemOptions, NavAction, NavKey};

use crate::focus::FocusRing;

/// Clickable, keyboard-navigable panel header.
#[component]
pub fn Heading(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] title_view: Option<ViewFn>,
    index: usize,
    #[prop(into)] is_active: MaybeSignal<bool>,
    #[prop(optional_no_strip)] icon: Option<ViewFn>,
    #[prop(optional)] options: ItemOptions,
    #[prop(optional_no_strip)] toggle: Option<Callback<usize>>,
    focus: FocusRing,
) -> impl IntoView {
    let node_ref = focus
        .header(index)
        .unwrap_or_else(create_node_ref::<html::Div>);

    let heading_class = ClassList::new(classes::HEADING)
        .with(options.heading_container_class.as_deref())
        .build();
    let title_class = ClassList::new(classes::TITLE_CONTAINER)
        .with(options.title_container_class.as_deref())
        .build();
    let icon_class = ClassList::new(classes::ICON_CONTAINER)
        .with(options.icon_class.as_deref())
        .build();

    let on_click = move |_| {
        if let Some(toggle) = toggle {
            toggle.call(index);
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Ok(key) = ev.key().parse::<NavKey>() else {
            return;
        };
        match focus.order().resolve(key, index) {
            Some(NavAction::Toggle(target)) => {
                if let Some(toggle) = toggle {
                    toggle.call(target);
                }
            }
            Some(NavAction::Focus(target)) => focus.focus(target),
            None => {}
        }
    };

    let label = title.clone();
    let title_content = match title_view {
        Some(view) => view.run(),
        None => title.into_view(),
    };
    let icon_content = match icon {
        Some(icon) => icon.run(),
        None => view! { <div class=classes::ICON></div> }.into_view(),
    };

    view! {
        <div
            node_ref=node_ref
            role="button"
            tabindex="0"
            class=heading_class
            aria-expanded=move || is_active.get().to_string()
            aria-label=label
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class=title_class>{title_content}</div>
            <div class=icon_class>{icon_content}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{find, mount, press, tick};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_heading_accessibility_attributes() {
        let root = mount(|| {
            view! { <Heading title="Shipping" index=0 is_active=true focus=FocusRing::solo(0) /> }
        });
        tick().await;

        let heading = find(&root, ".accordion-item_heading");
        assert_eq!(heading.get_attribute("role").as_deref(), Some("button"));
        assert_eq!(heading.get_attribute("tabindex").as_deref(), Some("0"));
        assert_eq!(heading.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(heading.get_attribute("aria-label").as_deref(), Some("Shipping"));
        assert!(root.query_selector(".accordion-item_icon").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_heading_click_and_enter_toggle_own_index() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = calls.clone();
        let root = mount(move || {
            let toggle = Callback::new(move |index: usize| recorded.borrow_mut().push(index));
            view! {
                <Heading
                    title="Returns"
                    index=3
                    is_active=false
                    toggle=Some(toggle)
                    focus=FocusRing::solo(3)
                />
            }
        });
        tick().await;

        let heading = find(&root, ".accordion-item_heading");
        heading.click();
        press(&heading, "Enter");
        press(&heading, "Escape");
        tick().await;

        assert_eq!(*calls.borrow(), vec![3, 3]);
    }

    #[wasm_bindgen_test]
    async fn test_custom_icon_replaces_default() {
        let root = mount(|| {
            let icon = ViewFn::from(|| view! { <span class="chevron">"v"</span> });
            view! { <Heading title="Icons" index=0 is_active=false icon=Some(icon) focus=FocusRing::solo(0) /> }
        });
        tick().await;

        assert!(root.query_selector(".chevron").unwrap().is_some());
        assert!(root.query_selector(".accordion-item_icon").unwrap().is_none());
    }
}
