//! Direct navigation to an in-page anchor.
//!
//! Arriving on a URL with a fragment can race the entry transition: the
//! observer may fire before the diagonal layout settles, leaving the scroll
//! position off by the transition distance and the wrong image showing. So
//! once the page has loaded, wait out the transition, then force both the
//! matching section and the scroll position.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;

use super::app::Shared;

/// One-shot deferral that lets the entry transition finish.
pub(crate) const ANCHOR_SETTLE_MS: u32 = 500;

pub(crate) fn install(app: &Shared) {
    let window = app.borrow().page.window.clone();
    let load_app = app.clone();
    EventListener::new(&window, "load", move |_event| {
        schedule(&load_app);
    })
    .forget();
}

fn schedule(app: &Shared) {
    let document = app.borrow().page.document.clone();
    let Ok(Some(target)) = document.query_selector(":target") else {
        return;
    };
    // The article may be inside the target, an ancestor of it, or the target
    // itself; `closest` covers the latter two.
    let article = document
        .query_selector(":target article")
        .ok()
        .flatten()
        .or_else(|| target.closest("article").ok().flatten());
    let Some(article) = article else {
        gloo::console::log!(format!("anchor: no article around #{}", target.id()));
        return;
    };
    let Some(section) = app.borrow().page.article_index(&article.id()) else {
        gloo::console::error!(format!("anchor: unregistered article #{}", article.id()));
        return;
    };

    let deferred_app = app.clone();
    Timeout::new(ANCHOR_SETTLE_MS, move || {
        let mut app = deferred_app.borrow_mut();
        app.tracker.set_active(section);
        app.show_section(section);
        target.scroll_into_view_with_bool(true);
    })
    .forget();
}
