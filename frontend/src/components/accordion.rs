use leptos::*;
use shared::{classes, AccordionConfig, ActiveSet, ConfigWarning, ItemOptions, ItemToggle};

use crate::components::accordion_item::AccordionItem;
use crate::components::body::Body;
use crate::focus::FocusRing;

/// One panel as supplied by the host.
#[derive(Clone)]
pub struct AccordionPanel {
    /// Header text, also used as the header's accessible label.
    pub title: String,
    /// Rendered in place of `title` when set.
    pub title_view: Option<ViewFn>,
    pub body: Body,
    /// Explicit options; unset fields fall back to the container's.
    pub options: ItemOptions,
    pub icon: Option<ViewFn>,
    pub on_item_toggle: Option<Callback<(usize, ItemToggle)>>,
}

impl AccordionPanel {
    pub fn new(title: impl Into<String>, body: impl Into<Body>) -> Self {
        Self {
            title: title.into(),
            title_view: None,
            body: body.into(),
            options: ItemOptions::default(),
            icon: None,
            on_item_toggle: None,
        }
    }

    pub fn title_view(mut self, view: impl Into<ViewFn>) -> Self {
        self.title_view = Some(view.into());
        self
    }

    pub fn options(mut self, options: ItemOptions) -> Self {
        self.options = options;
        self
    }

    pub fn icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn on_item_toggle(mut self, callback: Callback<(usize, ItemToggle)>) -> Self {
        self.on_item_toggle = Some(callback);
        self
    }
}

/// Collapsible accordion owning the set of expanded panels.
///
/// `on_item_toggling` fires once per toggle request, right after the active
/// set changed. Each panel additionally fires `on_item_toggle` when it sees
/// its own active flag change.
#[component]
pub fn Accordion(
    panels: Vec<AccordionPanel>,
    #[prop(optional)] config: AccordionConfig,
    #[prop(optional)] on_item_toggling: Option<Callback<(usize, ItemToggle)>>,
    #[prop(optional)] on_item_toggle: Option<Callback<(usize, ItemToggle)>>,
    #[prop(optional)] on_config_warnings: Option<Callback<Vec<ConfigWarning>>>,
    #[prop(optional)] icon: Option<ViewFn>,
) -> impl IntoView {
    let warnings = config.validate_for(panels.len());
    for warning in &warnings {
        log::warn!("{warning}");
    }
    match on_config_warnings {
        Some(on_config_warnings) if !warnings.is_empty() => on_config_warnings.call(warnings),
        _ => {}
    }

    let AccordionConfig {
        multiple,
        default_active_items,
        class,
        closed_class,
        item: item_defaults,
    } = config;

    let active = create_rw_signal(ActiveSet::new(&default_active_items, multiple));

    // Panel effects are held back by the batch, so the toggling
    // notification always precedes the per-panel toggle notifications.
    let toggle = Callback::new(move |index: usize| {
        batch(move || {
            let Some(change) = active.try_update(|set| set.toggle(index)) else {
                return;
            };
            log::debug!("accordion item {index} toggled, active: {}", change.active);
            if let Some(on_item_toggling) = on_item_toggling {
                on_item_toggling.call((index, change));
            }
        });
    });

    let container_class = move || {
        classes::accordion_class(
            class.as_deref(),
            closed_class.as_deref(),
            active.with(ActiveSet::is_empty),
        )
    };

    let focus = FocusRing::new(panels.len());

    let items = panels
        .into_iter()
        .enumerate()
        .map(|(index, panel)| {
            let is_active = Signal::derive(move || active.with(|set| set.contains(index)));
            let options = item_defaults.overlay(&panel.options);
            let icon = panel.icon.or_else(|| icon.clone());
            let on_item_toggle = panel.on_item_toggle.or(on_item_toggle);

            view! {
                <AccordionItem
                    title=panel.title
                    title_view=panel.title_view
                    body=panel.body
                    index=index
                    is_active=is_active
                    toggle=Some(toggle)
                    on_item_toggle=on_item_toggle
                    options=options
                    icon=icon
                    focus=Some(focus.clone())
                />
            }
        })
        .collect_view();

    view! {
        <div class=container_class>
            {items}
        </div>
    }
}
