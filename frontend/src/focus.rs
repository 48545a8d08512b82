use std::rc::Rc;

use leptos::*;
use shared::PanelOrder;

/// Header node refs of every panel, kept parallel to the panel order.
#[derive(Clone)]
pub struct FocusRing {
    order: PanelOrder,
    headers: Rc<[NodeRef<html::Div>]>,
}

impl FocusRing {
    /// One fresh header ref per positional panel id.
    pub fn new(len: usize) -> Self {
        Self {
            order: PanelOrder::new(len),
            headers: (0..len).map(|_| create_node_ref::<html::Div>()).collect(),
        }
    }

    /// Ring for a panel rendered outside an accordion.
    pub fn solo(id: usize) -> Self {
        Self {
            order: PanelOrder::from_ids(vec![id]),
            headers: Rc::from([create_node_ref::<html::Div>()]),
        }
    }

    pub fn order(&self) -> &PanelOrder {
        &self.order
    }

    pub fn header(&self, id: usize) -> Option<NodeRef<html::Div>> {
        let position = self.order.position(id)?;
        self.headers.get(position).copied()
    }

    pub fn focus(&self, id: usize) {
        let Some(header) = self.header(id).and_then(|node| node.get_untracked()) else {
            return;
        };
        if header.focus().is_err() {
            log::debug!("could not focus accordion header {id}");
        }
    }
}
