//! Target-independent accordion logic: the active-set state machine,
//! configuration, keyboard navigation and transition bookkeeping.

pub mod active_set;
pub mod animation;
pub mod classes;
pub mod config;
pub mod navigation;
pub mod options;

pub use active_set::{ActiveSet, ItemState, ItemToggle};
pub use animation::{
    detect_change, AnimationEnd, AnimationTicket, AnimationTiming, HeightTarget, HeightTransition,
};
pub use classes::ClassList;
pub use config::{AccordionConfig, ConfigError, ConfigReport, ConfigWarning};
pub use navigation::{NavAction, NavKey, PanelOrder};
pub use options::{ItemOptions, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_ANIMATION_EASING};
