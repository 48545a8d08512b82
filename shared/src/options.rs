use serde::{Deserialize, Serialize};

use crate::animation::AnimationTiming;

pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;
pub const DEFAULT_ANIMATION_EASING: &str = "ease-in-out";

/// Per-panel presentation options.
///
/// Every field is optional so the same type carries both container-level
/// defaults and explicit per-panel values; see [`ItemOptions::overlay`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemOptions {
    /// Height animation duration in milliseconds.
    pub animation_duration: Option<u32>,
    /// CSS easing function for the height animation.
    pub animation_easing: Option<String>,
    /// Scroll the panel into view once it has finished opening.
    pub scroll_into_view: Option<bool>,
    pub item_container_class: Option<String>,
    pub heading_container_class: Option<String>,
    pub title_container_class: Option<String>,
    pub content_container_class: Option<String>,
    pub content_class: Option<String>,
    pub icon_class: Option<String>,
}

impl ItemOptions {
    /// Returns `explicit` with any unset field filled from `self`.
    pub fn overlay(&self, explicit: &ItemOptions) -> ItemOptions {
        fn pick<T: Clone>(explicit: &Option<T>, fallback: &Option<T>) -> Option<T> {
            explicit.clone().or_else(|| fallback.clone())
        }

        ItemOptions {
            animation_duration: explicit.animation_duration.or(self.animation_duration),
            animation_easing: pick(&explicit.animation_easing, &self.animation_easing),
            scroll_into_view: explicit.scroll_into_view.or(self.scroll_into_view),
            item_container_class: pick(&explicit.item_container_class, &self.item_container_class),
            heading_container_class: pick(
                &explicit.heading_container_class,
                &self.heading_container_class,
            ),
            title_container_class: pick(&explicit.title_container_class, &self.title_container_class),
            content_container_class: pick(
                &explicit.content_container_class,
                &self.content_container_class,
            ),
            content_class: pick(&explicit.content_class, &self.content_class),
            icon_class: pick(&explicit.icon_class, &self.icon_class),
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.animation_duration.unwrap_or(DEFAULT_ANIMATION_DURATION_MS)
    }

    pub fn easing(&self) -> &str {
        self.animation_easing
            .as_deref()
            .unwrap_or(DEFAULT_ANIMATION_EASING)
    }

    pub fn scrolls_into_view(&self) -> bool {
        self.scroll_into_view.unwrap_or(false)
    }

    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming::new(self.duration_ms(), self.easing())
    }
}
