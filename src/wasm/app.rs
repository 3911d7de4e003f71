//! Shared state behind the event handlers.
//!
//! Each component owns its slice exclusively: the tracker owns the active
//! index, the deck owns the layer states, the settings module owns the mode.
//! Handlers borrow the whole `App` for the duration of one event, which is
//! safe because every handler runs to completion on the main thread.

use std::cell::RefCell;
use std::rc::Rc;

use super::page::{PageDom, CLASS_HIDDEN};
use super::render;
use crate::deck::ImageDeck;
use crate::layout::{viewport_is_wide, LayoutMode};
use crate::throttle::{RateGate, SCROLL_THROTTLE_MS};
use crate::visibility::VisibilityTracker;
use crate::wrap::{self, WrapGeometry};

pub(crate) type Shared = Rc<RefCell<App>>;

pub(crate) struct App {
    pub page: PageDom,
    pub tracker: VisibilityTracker,
    pub deck: ImageDeck,
    pub mode: LayoutMode,
    pub scroll_gate: RateGate,
    observer_supported: bool,
}

impl App {
    pub fn new(page: PageDom, observer_supported: bool) -> App {
        // The deck starts out matching the markup default (layer 0 current);
        // nothing is written until an event calls for a change.
        let deck = ImageDeck::new(page.slots.len());
        App {
            page,
            tracker: VisibilityTracker::new(),
            deck,
            mode: LayoutMode::Diagonal,
            scroll_gate: RateGate::new(SCROLL_THROTTLE_MS),
            observer_supported,
        }
    }

    /// The diagonal scroll behaviour needs intersection observation, the
    /// diagonal mode, and a viewport past the desktop breakpoint. The root
    /// font size is sampled live since the user can change it at any time.
    pub fn scroll_effects_enabled(&self) -> bool {
        self.observer_supported
            && self.mode == LayoutMode::Diagonal
            && viewport_is_wide(self.page.client_width(), self.page.root_font_size())
    }

    /// Display layer `k`. A section index with no matching layer is logged
    /// and leaves the previous state intact.
    pub fn show_section(&mut self, k: usize) {
        if !self.deck.apply_active(k) {
            gloo::console::error!(format!("image stack: no layer for section {k}"));
            return;
        }
        render::sync(&self.page, &self.deck);
    }

    /// Recompute the guide shape from the current geometry, or hide the
    /// guide while the diagonal behaviour is off.
    pub fn update_wrap_shape(&self) {
        let Some(guide) = &self.page.guide else {
            return;
        };
        if !self.scroll_effects_enabled() {
            let _ = guide.class_list().add_1(CLASS_HIDDEN);
            return;
        }
        let _ = guide.class_list().remove_1(CLASS_HIDDEN);
        let shape = wrap::compute(self.page.wrap_geometry());
        render::apply_wrap_shape(guide, &shape);
    }

    /// Collapse the guide to the zero baseline so a reflow in progress never
    /// wraps text against stale geometry.
    pub fn reset_wrap_baseline(&self) {
        if let Some(guide) = &self.page.guide {
            render::apply_wrap_shape(guide, &wrap::compute(WrapGeometry::zero()));
        }
    }

    pub fn hide_guide(&self) {
        if let Some(guide) = &self.page.guide {
            let _ = guide.class_list().add_1(CLASS_HIDDEN);
        }
    }

    /// Switch modes and re-derive the dependent visual state.
    ///
    /// Entering the diagonal mode re-shapes the guide immediately and leaves
    /// the image layering to the next intersection batch. Entering the
    /// rectangular mode resets the deck right away, because the tracker is
    /// dormant there and would never deliver the reset.
    pub fn apply_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
        let body = self.page.body.class_list();
        match mode {
            LayoutMode::Diagonal => {
                let _ = body.remove_1(super::page::CLASS_RECTANGULAR);
                let _ = body.add_1(super::page::CLASS_DIAGONAL);
                self.sync_toggle(true);
                self.update_wrap_shape();
            }
            LayoutMode::Rectangular => {
                let _ = body.remove_1(super::page::CLASS_DIAGONAL);
                let _ = body.add_1(super::page::CLASS_RECTANGULAR);
                self.sync_toggle(false);
                self.deck.reset_neutral();
                render::sync(&self.page, &self.deck);
                self.hide_guide();
            }
        }
    }

    fn sync_toggle(&self, pressed: bool) {
        let Some(toggle) = &self.page.toggle else {
            return;
        };
        let _ = toggle.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
        let title = if pressed {
            "Switch to the layout without sliding text and photos"
        } else {
            "Switch to the layout where text and photos slide in on scroll"
        };
        let _ = toggle.set_attribute("title", title);
    }
}
