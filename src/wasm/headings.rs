//! Margin compensation under absolutely positioned headings.
//!
//! Headings sit on top of the main images with `position: absolute`, so the
//! element after each one would otherwise slide up behind it. Each follower
//! gets a `margin-top` equal to the heading's rendered height. The CSS
//! carries approximate margins of its own; this pass tightens them at the
//! breakpoints where headings wrap onto a second line.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::page::parse_px;

/// Below this viewport width headings flow normally and no margin is needed.
const HEADING_BREAKPOINT_PX: f64 = 674.0;

/// Part of the heading height the stylesheet already accounts for, except
/// inside showcase groups.
const HEADING_ALLOWANCE_PX: f64 = 72.0;

/// Re-measure this long after window load, once fonts have settled.
const HEADING_SETTLE_MS: u32 = 100;

pub(crate) fn install(window: &Window, document: &Document) {
    apply(window, document);

    let load_window = window.clone();
    let load_document = document.clone();
    EventListener::new(window, "load", move |_event| {
        let window = load_window.clone();
        let document = load_document.clone();
        Timeout::new(HEADING_SETTLE_MS, move || apply(&window, &document)).forget();
    })
    .forget();

    let resize_window = window.clone();
    let resize_document = document.clone();
    EventListener::new(window, "resize", move |_event| {
        apply(&resize_window, &resize_document);
    })
    .forget();
}

fn apply(window: &Window, document: &Document) {
    let (Ok(headings), Ok(followers)) = (
        document.query_selector_all("section article h2"),
        document.query_selector_all("article h2 + *"),
    ) else {
        return;
    };

    let wide = document
        .document_element()
        .map(|root| root.client_width() as f64 > HEADING_BREAKPOINT_PX)
        .unwrap_or(false);

    for i in 0..headings.length().min(followers.length()) {
        let heading = headings
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
        let follower = followers
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
        let (Some(heading), Some(follower)) = (heading, follower) else {
            continue;
        };
        let margin = if wide {
            margin_needed(window, &heading)
        } else {
            0.0
        };
        let _ = follower
            .style()
            .set_property("margin-top", &format!("{margin}px"));
    }
}

fn margin_needed(window: &Window, heading: &HtmlElement) -> f64 {
    let style = window.get_computed_style(heading).ok().flatten();
    let measure = |property: &str| {
        style
            .as_ref()
            .and_then(|style| style.get_property_value(property).ok())
            .and_then(|value| parse_px(&value))
            .unwrap_or(0.0)
    };
    let margin_top = measure("margin-top");
    let margin_bottom = measure("margin-bottom");
    let border_top = measure("border-top-width");

    // Showcase headings need the full height.
    let in_showcase = matches!(heading.closest(".showcase-group"), Ok(Some(_)));
    let allowance = if in_showcase { 0.0 } else { HEADING_ALLOWANCE_PX };

    heading.offset_height() as f64 + margin_top + margin_bottom + border_top - allowance
}
