//! Keyboard navigation between panel headers.
//!
//! The container keeps an explicit ordered list of panel ids; every lookup
//! goes through that list rather than through the rendered tree.

use std::str::FromStr;

/// Keys handled on a panel header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Home,
    End,
    ArrowUp,
    ArrowDown,
}

impl FromStr for NavKey {
    type Err = ();

    /// Parses a DOM `KeyboardEvent.key` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enter" => Ok(NavKey::Enter),
            "Home" => Ok(NavKey::Home),
            "End" => Ok(NavKey::End),
            "ArrowUp" => Ok(NavKey::ArrowUp),
            "ArrowDown" => Ok(NavKey::ArrowDown),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Flip the panel's active state.
    Toggle(usize),
    /// Move keyboard focus to the panel's header.
    Focus(usize),
}

/// Ordered panel ids as rendered by the container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelOrder {
    ids: Vec<usize>,
}

impl PanelOrder {
    /// Positional ids `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            ids: (0..len).collect(),
        }
    }

    pub fn from_ids(ids: Vec<usize>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: usize) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    pub fn first(&self) -> Option<usize> {
        self.ids.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.ids.last().copied()
    }

    pub fn next(&self, id: usize) -> Option<usize> {
        let position = self.position(id)?;
        self.ids.get(position + 1).copied()
    }

    pub fn previous(&self, id: usize) -> Option<usize> {
        let position = self.position(id)?;
        position
            .checked_sub(1)
            .and_then(|p| self.ids.get(p))
            .copied()
    }

    /// Maps a key press on `current`'s header to what should happen.
    ///
    /// Arrow keys at either end of the list resolve to `None`.
    pub fn resolve(&self, key: NavKey, current: usize) -> Option<NavAction> {
        match key {
            NavKey::Enter => Some(NavAction::Toggle(current)),
            NavKey::Home => self.first().map(NavAction::Focus),
            NavKey::End => self.last().map(NavAction::Focus),
            NavKey::ArrowUp => self.previous(current).map(NavAction::Focus),
            NavKey::ArrowDown => self.next(current).map(NavAction::Focus),
        }
    }
}
