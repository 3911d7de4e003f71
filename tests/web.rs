#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use folio_wasm::layout::{LayoutMode, LAYOUT_STORAGE_KEY};
use folio_wasm::wrap::{self, WrapGeometry};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn layout_preference_survives_a_storage_round_trip() {
    let window = web_sys::window().unwrap();
    let storage = window.local_storage().unwrap().expect("no localStorage");

    storage
        .set_item(LAYOUT_STORAGE_KEY, LayoutMode::Diagonal.as_str())
        .unwrap();
    let stored = storage.get_item(LAYOUT_STORAGE_KEY).unwrap();
    // With a stored value the system preference no longer matters.
    assert_eq!(
        LayoutMode::resolve(stored.as_deref(), true),
        LayoutMode::Diagonal
    );

    storage.remove_item(LAYOUT_STORAGE_KEY).unwrap();
    let cleared = storage.get_item(LAYOUT_STORAGE_KEY).unwrap();
    assert_eq!(LayoutMode::resolve(cleared.as_deref(), false), LayoutMode::Diagonal);
}

#[wasm_bindgen_test]
fn reduced_motion_query_is_available() {
    let window = web_sys::window().unwrap();
    let query = window
        .match_media("(prefers-reduced-motion: reduce)")
        .unwrap();
    assert!(query.is_some());
}

#[wasm_bindgen_test]
fn wrap_shape_lands_on_an_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let guide = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();

    let shape = wrap::compute(WrapGeometry {
        viewport_height: 800.0,
        scroll_offset: 100.0,
        wrap_end: 2000.0,
    });
    guide
        .style()
        .set_property("height", &format!("{}px", shape.height_px))
        .unwrap();
    guide
        .style()
        .set_property("shape-outside", &shape.shape_outside)
        .unwrap();

    assert_eq!(guide.style().get_property_value("height").unwrap(), "2000px");
    assert!(guide
        .style()
        .get_property_value("shape-outside")
        .unwrap()
        .starts_with("polygon("));
}

#[wasm_bindgen_test]
fn class_writes_are_idempotent() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    let classes = element.class_list();

    classes.add_1("hidden").unwrap();
    classes.add_1("hidden").unwrap();
    assert_eq!(element.class_name(), "hidden");

    classes.remove_1("hidden").unwrap();
    classes.remove_1("hidden").unwrap();
    assert_eq!(element.class_name(), "");
}
