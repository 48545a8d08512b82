use leptos::*;
use shared::{classes, detect_change, AnimationEnd, ItemOptions, ItemToggle};

use crate::animation::scroll_into_view_nearest;
use crate::components::body::Body;
use crate::components::content::Content;
use crate::components::heading::Heading;
use crate::focus::FocusRing;

/// A single collapsible panel.
///
/// Inside an [`Accordion`](crate::components::Accordion) every prop except
/// the title and body is filled in by the container. Rendered on its own,
/// the panel is driven entirely through `is_active`.
#[component]
pub fn AccordionItem(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] title_view: Option<ViewFn>,
    #[prop(into)] body: Body,
    #[prop(optional)] index: usize,
    #[prop(optional, into)] is_active: MaybeSignal<bool>,
    #[prop(optional_no_strip)] toggle: Option<Callback<usize>>,
    /// Fired whenever `is_active` changes after the first render.
    #[prop(optional_no_strip)]
    on_item_toggle: Option<Callback<(usize, ItemToggle)>>,
    #[prop(optional)] options: ItemOptions,
    #[prop(optional_no_strip)] icon: Option<ViewFn>,
    #[prop(optional_no_strip)] focus: Option<FocusRing>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let focus = focus.unwrap_or_else(|| FocusRing::solo(index));
    let scroll_on_open = options.scrolls_into_view();

    create_effect(move |previous: Option<bool>| {
        let active = is_active.get();
        if let Some(change) = detect_change(previous, active) {
            if let Some(on_item_toggle) = on_item_toggle {
                on_item_toggle.call((index, change));
            }
        }
        active
    });

    // Runs after the height has settled, so the final size is in place.
    let on_animation_end = Callback::new(move |end: AnimationEnd| {
        if !end.should_scroll(scroll_on_open) {
            return;
        }
        if let Some(el) = container.get_untracked() {
            scroll_into_view_nearest(&el);
        }
    });

    let item_class = options.item_container_class.clone();

    view! {
        <div
            node_ref=container
            data-testid=format!("accordion-item-{index}")
            class=move || classes::item_class(item_class.as_deref(), is_active.get())
        >
            <Heading
                title=title
                title_view=title_view
                index=index
                is_active=is_active
                icon=icon
                options=options.clone()
                toggle=toggle
                focus=focus
            />
            <Content
                is_active=is_active
                body=body
                options=options
                on_animation_end=Some(on_animation_end)
            />
        </div>
    }
}
