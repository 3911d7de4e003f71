//! Writes deck and guide end-states into the DOM.
//!
//! Only discrete classes and properties are set here; the transition timing
//! between states is owned by the stylesheet and by the rules injected after
//! first paint.

use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::page::{PageDom, CLASS_AFTER_CURRENT, CLASS_HIDDEN, CLASS_WITH_CAPTION};
use crate::deck::{ClipSide, ImageDeck, StackOrder};
use crate::wrap::WrapShape;

/// Transitions are injected this long after start so the first paint is
/// static.
pub(crate) const TRANSITION_DELAY_MS: u32 = 150;

/// The hide transition is delayed past the reveal so an outgoing layer never
/// overlaps an incoming one; captions follow the hide timing.
const TRANSITION_RULES: &str = "\
.has-intersection-observer.diagonal .main-image {
    transition: clip-path 0.6s 0s;
}

.has-intersection-observer.diagonal .main-image.hidden {
    transition: clip-path 0.6s 0.6s, width 0.6s 0.6s;
}

.diagonal .main-image-figure figcaption {
    transition: clip-path 0.6s 0.6s, opacity 0.6s 0.6s;
}
";

/// Bring every image layer in line with the deck.
///
/// Captions are cleared in a first pass so no stale caption can flash while
/// the layer classes are still being written; the single caption reveal
/// happens with its layer's other writes.
pub(crate) fn sync(page: &PageDom, deck: &ImageDeck) {
    for (slot, state) in page.slots.iter().zip(deck.layers()) {
        if !state.caption {
            let _ = slot.figure.class_list().remove_1(CLASS_WITH_CAPTION);
        }
    }
    for (slot, state) in page.slots.iter().zip(deck.layers()) {
        let classes = slot.image.class_list();
        if state.hidden {
            let _ = classes.add_1(CLASS_HIDDEN);
        } else {
            let _ = classes.remove_1(CLASS_HIDDEN);
        }
        // Absence of the class means the clip re-opens rightward.
        match state.clip {
            Some(ClipSide::AfterCurrent) => {
                let _ = classes.add_1(CLASS_AFTER_CURRENT);
            }
            Some(ClipSide::BeforeCurrent) | None => {
                let _ = classes.remove_1(CLASS_AFTER_CURRENT);
            }
        }
        let z = match state.order {
            StackOrder::Front => "1",
            StackOrder::Back => "0",
        };
        let _ = slot.image.style().set_property("z-index", z);
        if state.caption {
            let _ = slot.figure.class_list().add_1(CLASS_WITH_CAPTION);
        }
    }
}

pub(crate) fn apply_wrap_shape(guide: &HtmlElement, shape: &WrapShape) {
    let style = guide.style();
    let _ = style.set_property("height", &format!("{}px", shape.height_px));
    let _ = style.set_property("shape-outside", &shape.shape_outside);
}

pub(crate) fn schedule_transitions(document: &Document) {
    let document = document.clone();
    Timeout::new(TRANSITION_DELAY_MS, move || inject_transitions(&document)).forget();
}

fn inject_transitions(document: &Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(TRANSITION_RULES));
    // Before the first script if there is one, otherwise into the head.
    if let Ok(Some(script)) = document.query_selector("script") {
        if let Some(parent) = script.parent_node() {
            let _ = parent.insert_before(&style, Some(script.as_ref()));
            return;
        }
    }
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
