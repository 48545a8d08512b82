//! Bookkeeping for panel open/close transitions.
//!
//! The DOM side fires animations without cancelling earlier ones; the
//! generation counter here decides which completion is still current.

use crate::active_set::ItemToggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTiming {
    pub duration_ms: u32,
    pub easing: String,
}

impl AnimationTiming {
    pub fn new(duration_ms: u32, easing: impl Into<String>) -> Self {
        Self {
            duration_ms,
            easing: easing.into(),
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Value for the CSS `transition` property.
    pub fn transition_css(&self) -> String {
        format!("height {}ms {}", self.duration_ms, self.easing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightTarget {
    Collapsed,
    /// The content's own height.
    Natural,
}

impl HeightTarget {
    pub fn from_active(active: bool) -> Self {
        if active {
            HeightTarget::Natural
        } else {
            HeightTarget::Collapsed
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, HeightTarget::Natural)
    }

    /// CSS `height` once the animation has finished.
    pub fn settled_css(&self) -> &'static str {
        match self {
            HeightTarget::Collapsed => "0px",
            HeightTarget::Natural => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTicket {
    generation: u64,
    pub target: HeightTarget,
    opening: bool,
}

/// A completion that belongs to the latest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEnd {
    pub target: HeightTarget,
    /// The transition went from collapsed to expanded.
    pub opened: bool,
}

impl AnimationEnd {
    /// Scroll-into-view runs only once a panel has finished opening.
    pub fn should_scroll(&self, scroll_on_open: bool) -> bool {
        self.opened && scroll_on_open
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightTransition {
    generation: u64,
    target: HeightTarget,
}

impl HeightTransition {
    pub fn new(active: bool) -> Self {
        Self {
            generation: 0,
            target: HeightTarget::from_active(active),
        }
    }

    pub fn target(&self) -> HeightTarget {
        self.target
    }

    /// Starts a transition towards `active`, superseding any in flight.
    pub fn begin(&mut self, active: bool) -> AnimationTicket {
        let opening = !self.target.is_expanded() && active;
        self.generation += 1;
        self.target = HeightTarget::from_active(active);
        AnimationTicket {
            generation: self.generation,
            target: self.target,
            opening,
        }
    }

    /// Returns `None` when `ticket` was superseded by a later `begin`.
    pub fn complete(&self, ticket: AnimationTicket) -> Option<AnimationEnd> {
        (ticket.generation == self.generation).then_some(AnimationEnd {
            target: ticket.target,
            opened: ticket.opening,
        })
    }
}

/// Compares the activation flag against its previous observation.
///
/// The first observation (`previous == None`) never counts as a change.
pub fn detect_change(previous: Option<bool>, current: bool) -> Option<ItemToggle> {
    match previous {
        Some(previous) if previous != current => Some(ItemToggle { active: current }),
        _ => None,
    }
}
