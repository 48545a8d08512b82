use leptos::*;
use shared::classes::{self, ClassList};
use shared::{AnimationEnd, HeightTarget, HeightTransition, ItemOptions};

use crate::animation::{animate_height, settle_height};
use crate::components::body::Body;

/// Panel content region with an animated height.
///
/// `on_animation_end` only fires for the transition started by the latest
/// activation change; completions of superseded transitions are dropped.
#[component]
pub fn Content(
    #[prop(into)] is_active: MaybeSignal<bool>,
    #[prop(into)] body: Body,
    #[prop(optional)] options: ItemOptions,
    #[prop(optional_no_strip)] on_animation_end: Option<Callback<AnimationEnd>>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let timing = options.timing();
    let initially_active = is_active.get_untracked();
    let transition = store_value(HeightTransition::new(initially_active));

    create_effect(move |previous: Option<bool>| {
        let active = is_active.get();
        if previous.is_some_and(|previous| previous != active) {
            let ticket = transition.try_update_value(|transition| transition.begin(active));
            if let (Some(ticket), Some(el)) = (ticket, container.get_untracked()) {
                let el: web_sys::HtmlElement = (*el).clone().into();
                let settled = el.clone();
                animate_height(&el, ticket.target, &timing, move || {
                    let Some(Some(end)) = transition.try_with_value(|t| t.complete(ticket)) else {
                        return;
                    };
                    settle_height(&settled, end.target);
                    if let Some(on_animation_end) = on_animation_end {
                        on_animation_end.call(end);
                    }
                });
            }
        }
        active
    });

    let container_class = ClassList::new(classes::CONTENT_CONTAINER)
        .with(options.content_container_class.as_deref())
        .build();
    let content_class = ClassList::new(classes::CONTENT)
        .with(options.content_class.as_deref())
        .build();
    let initial_style = format!(
        "overflow: hidden; height: {};",
        HeightTarget::from_active(initially_active).settled_css()
    );

    view! {
        <div
            node_ref=container
            class=container_class
            style=initial_style
            aria-hidden=move || (!is_active.get()).to_string()
        >
            <div class=content_class role="region" tabindex="-1">
                {body.render(is_active)}
            </div>
        </div>
    }
}
