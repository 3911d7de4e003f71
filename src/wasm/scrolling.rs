//! Scroll, resize, and load listeners for the wrap-shape updater.

use gloo::events::EventListener;
use js_sys::Date;

use super::app::Shared;

pub(crate) fn install(app: &Shared) {
    // A page without the diagonal graphic has nothing to re-shape.
    if app.borrow().page.guide.is_none() {
        return;
    }
    let window = app.borrow().page.window.clone();

    // Scroll storms are gated; only the first event per window runs.
    let scroll_app = app.clone();
    EventListener::new(&window, "scroll", move |_event| {
        let mut app = scroll_app.borrow_mut();
        if app.scroll_gate.admit(Date::now()) {
            app.update_wrap_shape();
        }
    })
    .forget();

    // Recompute once fonts and images have settled.
    let load_app = app.clone();
    EventListener::new(&window, "load", move |_event| {
        load_app.borrow().update_wrap_shape();
    })
    .forget();

    // A resize reflows the document, so drop to the zero baseline first and
    // measure from there.
    let resize_app = app.clone();
    EventListener::new(&window, "resize", move |_event| {
        let app = resize_app.borrow();
        app.reset_wrap_baseline();
        app.update_wrap_shape();
    })
    .forget();
}
