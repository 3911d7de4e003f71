#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Interactivity layer for a personal portfolio site, compiled to WebAssembly.
//!
//! The state machines (layout mode, visibility tracking, the image deck, the
//! text-wrap shape, throttling) are plain Rust and build on every target so
//! they can be tested on the host. Everything that touches the DOM lives in
//! the wasm32-only module below.

pub mod deck;
pub mod layout;
pub mod throttle;
pub mod visibility;
pub mod wrap;

#[cfg(target_arch = "wasm32")]
mod wasm {
    mod app;
    mod headings;
    mod navbar;
    mod observer;
    mod page;
    mod render;
    mod scrolling;
    mod settings;
    mod target;

    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // The nav menu and heading margins are independent of the scroll
        // machinery; wire them regardless of what else the page supports.
        navbar::install(&document);
        headings::install(&window, &document);

        let observer_supported = observer::supported(&window);
        let page = page::collect(&window, &document)?;
        page.mark_observer_support(observer_supported);

        let app = Rc::new(RefCell::new(app::App::new(page, observer_supported)));

        // The stored layout preference is applied here, before any scroll or
        // intersection event can be processed.
        settings::install(&app);
        if observer_supported {
            observer::install(&app)?;
        }
        scrolling::install(&app);
        target::install(&app);
        render::schedule_transitions(&document);

        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
