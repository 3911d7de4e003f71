//! Layout preference: storage, the system fallback, and the toggle button.
//!
//! Storage only changes on a user toggle. Load-time resolution reads it but
//! never writes, so until the user makes a choice the system motion
//! preference keeps deciding.

use gloo::events::EventListener;
use web_sys::{MediaQueryList, Window};

use super::app::{App, Shared};
use crate::layout::{LayoutMode, LAYOUT_STORAGE_KEY};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn stored_layout(window: &Window) -> Option<String> {
    let storage = window.local_storage().ok()??;
    storage.get_item(LAYOUT_STORAGE_KEY).ok()?
}

fn store_layout(window: &Window, mode: LayoutMode) {
    // Storage being unavailable is a valid state, not an error.
    let Some(storage) = window.local_storage().ok().flatten() else {
        return;
    };
    let _ = storage.set_item(LAYOUT_STORAGE_KEY, mode.as_str());
}

fn reduced_motion_query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Resolve the mode for page entry and apply it. Also re-run whenever the
/// system preference changes while the page is open.
fn apply_resolved(app: &mut App) {
    let window = app.page.window.clone();
    let stored = stored_layout(&window);
    let reduced = reduced_motion_query(&window)
        .map(|query| query.matches())
        .unwrap_or(false);
    let mode = LayoutMode::resolve(stored.as_deref(), reduced);
    app.apply_mode(mode);
}

pub(crate) fn install(app: &Shared) {
    apply_resolved(&mut app.borrow_mut());

    if let Some(query) = reduced_motion_query(&app.borrow().page.window) {
        let change_app = app.clone();
        EventListener::new(&query, "change", move |_event| {
            apply_resolved(&mut change_app.borrow_mut());
        })
        .forget();
    }

    let Some(toggle) = app.borrow().page.toggle.clone() else {
        return;
    };
    let click_app = app.clone();
    EventListener::new(&toggle, "click", move |_event| {
        let mut app = click_app.borrow_mut();
        let next = app.mode.toggled();
        app.apply_mode(next);
        store_layout(&app.page.window, next);
    })
    .forget();
}
