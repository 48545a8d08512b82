use serde::{Deserialize, Serialize};

/// New state of a panel after a toggle, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemToggle {
    pub active: bool,
}

impl ItemToggle {
    pub fn opened() -> Self {
        Self { active: true }
    }

    pub fn closed() -> Self {
        Self { active: false }
    }
}

/// State handed to dynamic panel bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemState {
    pub is_active: bool,
}

/// The set of expanded panel indices, in activation order.
///
/// Only the container mutates it, through [`ActiveSet::toggle`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveSet {
    items: Vec<usize>,
    multiple: bool,
}

impl ActiveSet {
    /// Builds the set from the configured initial indices.
    ///
    /// Duplicates are dropped. An oversized initial set in single-select
    /// mode is kept as given; the configuration layer reports it.
    pub fn new(initial: &[usize], multiple: bool) -> Self {
        let mut items = Vec::with_capacity(initial.len());
        for &index in initial {
            if !items.contains(&index) {
                items.push(index);
            }
        }
        Self { items, multiple }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.items
    }

    /// Flips `index` and returns its new state.
    ///
    /// An active index is removed. An inactive one is appended in
    /// multiple-select mode, otherwise it replaces the whole set.
    pub fn toggle(&mut self, index: usize) -> ItemToggle {
        if self.contains(index) {
            self.items.retain(|&i| i != index);
            ItemToggle::closed()
        } else {
            if !self.multiple {
                self.items.clear();
            }
            self.items.push(index);
            ItemToggle::opened()
        }
    }
}
