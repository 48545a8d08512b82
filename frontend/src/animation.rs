//! Height animation and scrolling glue over `web-sys`.

use gloo_timers::callback::Timeout;
use shared::{AnimationTiming, HeightTarget};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn px(value: i32) -> String {
    format!("{value}px")
}

/// Animates `el`'s height towards `target` and calls `on_end` afterwards.
///
/// Nothing is cancelled: a later call simply restarts from the current
/// height, and the caller decides whether an earlier `on_end` still matters.
pub fn animate_height(
    el: &HtmlElement,
    target: HeightTarget,
    timing: &AnimationTiming,
    on_end: impl FnOnce() + 'static,
) {
    let style = el.style();
    let from = el.offset_height();
    let to = match target {
        HeightTarget::Collapsed => 0,
        HeightTarget::Natural => el.scroll_height(),
    };

    let _ = style.set_property("transition", "none");
    let _ = style.set_property("height", &px(from));

    if timing.is_instant() {
        on_end();
        return;
    }

    // Force a reflow so the start height is applied before the transition.
    let _ = el.offset_height();
    let _ = style.set_property("transition", &timing.transition_css());
    let _ = style.set_property("height", &px(to));

    Timeout::new(timing.duration_ms, on_end).forget();
}

/// Replaces the animated pixel height with the resting value.
pub fn settle_height(el: &HtmlElement, target: HeightTarget) {
    let style = el.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("height", target.settled_css());
}

pub fn scroll_into_view_nearest(el: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Nearest);
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
