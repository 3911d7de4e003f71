//! The image stack: one layer per section, at most one showing.
//!
//! Hidden layers carry a direction so the stylesheet knows which edge their
//! clip re-opens from: predecessors of the current layer slide back in from
//! the left, successors from the right. The deck only records discrete
//! end-states; the animation curves between them belong to the CSS.

use std::cmp::Ordering;

/// Which edge a hidden layer clips toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipSide {
    /// The layer precedes the current one; its clip re-opens rightward.
    BeforeCurrent,
    /// The layer follows the current one; its clip re-opens leftward.
    AfterCurrent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackOrder {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerState {
    pub hidden: bool,
    pub clip: Option<ClipSide>,
    pub order: StackOrder,
    pub caption: bool,
}

impl LayerState {
    /// The one layer being shown: front of the stack, caption revealed.
    pub const fn current() -> Self {
        LayerState {
            hidden: false,
            clip: None,
            order: StackOrder::Front,
            caption: true,
        }
    }

    pub const fn before_current() -> Self {
        LayerState {
            hidden: true,
            clip: Some(ClipSide::BeforeCurrent),
            order: StackOrder::Back,
            caption: false,
        }
    }

    pub const fn after_current() -> Self {
        LayerState {
            hidden: true,
            clip: Some(ClipSide::AfterCurrent),
            order: StackOrder::Back,
            caption: false,
        }
    }

    /// Rest state for the rectangular layout: nothing hidden, no stacking.
    pub const fn at_rest() -> Self {
        LayerState {
            hidden: false,
            clip: None,
            order: StackOrder::Back,
            caption: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImageDeck {
    layers: Vec<LayerState>,
}

impl ImageDeck {
    /// A new deck mirrors the static markup default: layer 0 is current.
    pub fn new(len: usize) -> Self {
        let mut deck = ImageDeck {
            layers: vec![LayerState::at_rest(); len],
        };
        if len > 0 {
            deck.apply_active(0);
        }
        deck
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[LayerState] {
        &self.layers
    }

    /// Set the end-state for every layer given the active index `k`.
    ///
    /// Layers before `k` hide clipping toward one edge, layers after `k`
    /// toward the other, and `k` alone sits at the front with its caption.
    /// Re-applying the same index is a no-op in effect. Returns `false` and
    /// changes nothing when `k` is out of range.
    pub fn apply_active(&mut self, k: usize) -> bool {
        if k >= self.layers.len() {
            return false;
        }
        for (i, layer) in self.layers.iter_mut().enumerate() {
            *layer = match i.cmp(&k) {
                Ordering::Less => LayerState::before_current(),
                Ordering::Equal => LayerState::current(),
                Ordering::Greater => LayerState::after_current(),
            };
        }
        true
    }

    /// Rectangular layout: the stack becomes a plain vertical sequence.
    pub fn reset_neutral(&mut self) {
        for layer in &mut self.layers {
            *layer = LayerState::at_rest();
        }
    }
}
