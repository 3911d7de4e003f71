//! IntersectionObserver wiring for the visibility tracker.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::app::Shared;
use crate::visibility::Observation;

/// Sampled intersection ratios. The lower one is the activation threshold;
/// the upper one makes the observer re-report a section as it fills the
/// viewport.
const RATIO_SAMPLES: [f64; 2] = [0.1, 0.9];

pub(crate) fn supported(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

pub(crate) fn install(app: &Shared) -> Result<(), JsValue> {
    let batch_app = app.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut app = batch_app.borrow_mut();
            if !app.scroll_effects_enabled() {
                // Dormant: layering keeps whatever the diagonal mode last
                // set, ready to be restored without recomputation.
                app.hide_guide();
                return;
            }
            let mut batch = Vec::with_capacity(entries.length() as usize);
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let id = entry.target().id();
                match app.page.article_index(&id) {
                    Some(section) => {
                        batch.push(Observation::new(section, entry.intersection_ratio()));
                    }
                    None => {
                        gloo::console::error!(format!(
                            "visibility: no registered article for #{id}"
                        ));
                    }
                }
            }
            if let Some(active) = app.tracker.ingest(&batch) {
                app.show_section(active);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    let thresholds = js_sys::Array::new();
    for ratio in RATIO_SAMPLES {
        thresholds.push(&JsValue::from_f64(ratio));
    }
    options.set_threshold(&thresholds);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for article in &app.borrow().page.articles {
        observer.observe(&article.element);
    }
    Ok(())
}
