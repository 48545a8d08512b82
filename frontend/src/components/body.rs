use std::rc::Rc;

use leptos::*;
use shared::ItemState;

/// Panel content: fixed, or rebuilt from the panel's active state.
#[derive(Clone)]
pub enum Body {
    Static(ViewFn),
    Dynamic(Rc<dyn Fn(ItemState) -> View>),
}

impl Body {
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Body::Static(ViewFn::from(move || text.clone()))
    }

    pub fn view<F, IV>(render: F) -> Self
    where
        F: Fn() -> IV + 'static,
        IV: IntoView,
    {
        Body::Static(ViewFn::from(render))
    }

    pub fn dynamic<F, IV>(render: F) -> Self
    where
        F: Fn(ItemState) -> IV + 'static,
        IV: IntoView,
    {
        Body::Dynamic(Rc::new(move |state| render(state).into_view()))
    }

    pub(crate) fn render(self, is_active: MaybeSignal<bool>) -> View {
        match self {
            Body::Static(view) => view.run(),
            Body::Dynamic(render) => (move || {
                render(ItemState {
                    is_active: is_active.get(),
                })
            })
            .into_view(),
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::text(text)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::text(text)
    }
}
