//! Navigation submenus: at most one open, keyboard reachable.
//!
//! The submenus are checkbox-driven so they work without any script at all;
//! this module adds the exclusivity rule and the arrow-key behaviour on top.
//! Menus and their items are collected once into a registry and addressed by
//! index from then on.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

struct Submenu {
    tickbox: HtmlInputElement,
    label: HtmlElement,
    items: Vec<HtmlElement>,
}

pub(crate) fn install(document: &Document) {
    let menu = Rc::new(collect(document));
    if menu.is_empty() {
        return;
    }

    for (m, submenu) in menu.iter().enumerate() {
        // Opening one submenu closes the others.
        let menu_for_click = menu.clone();
        EventListener::new(&submenu.label, "click", move |_event| {
            for (j, other) in menu_for_click.iter().enumerate() {
                if j != m {
                    other.tickbox.set_checked(false);
                }
            }
        })
        .forget();

        let menu_for_keys = menu.clone();
        EventListener::new(&submenu.label, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let submenu = &menu_for_keys[m];
            match event.key().as_str() {
                "ArrowDown" => toggle_from_label(submenu, submenu.items.first()),
                "ArrowUp" => toggle_from_label(submenu, submenu.items.last()),
                // Tabbing away must not re-open the menu.
                "Tab" | "Shift" => {}
                _ => submenu.label.click(),
            }
        })
        .forget();

        for (n, item) in submenu.items.iter().enumerate() {
            // Following any submenu link closes every submenu.
            let menu_for_item = menu.clone();
            EventListener::new(item, "click", move |_event| {
                for submenu in menu_for_item.iter() {
                    submenu.tickbox.set_checked(false);
                }
            })
            .forget();

            let menu_for_item_keys = menu.clone();
            EventListener::new(item, "keydown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let submenu = &menu_for_item_keys[m];
                match event.key().as_str() {
                    "ArrowUp" => {
                        if n == 0 {
                            close_open_submenu(&menu_for_item_keys);
                        } else {
                            let _ = submenu.items[n - 1].focus();
                        }
                    }
                    "ArrowDown" => {
                        if n + 1 == submenu.items.len() {
                            close_open_submenu(&menu_for_item_keys);
                        } else {
                            let _ = submenu.items[n + 1].focus();
                        }
                    }
                    _ => {}
                }
            })
            .forget();
        }
    }
}

/// Arrow keys on a focused label toggle its submenu; opening also lands
/// focus on the given end of the item list.
fn toggle_from_label(submenu: &Submenu, landing: Option<&HtmlElement>) {
    let was_open = submenu.tickbox.checked();
    submenu.label.click();
    if !was_open {
        if let Some(item) = landing {
            let _ = item.focus();
        }
    }
}

fn close_open_submenu(menu: &[Submenu]) {
    if let Some(submenu) = menu.iter().find(|submenu| submenu.tickbox.checked()) {
        submenu.label.click();
        let _ = submenu.label.focus();
    }
}

fn collect(document: &Document) -> Vec<Submenu> {
    let (Ok(labels), Ok(tickboxes)) = (
        document.query_selector_all("nav ul label"),
        document.query_selector_all("nav ul input"),
    ) else {
        return Vec::new();
    };
    if labels.length() != tickboxes.length() {
        gloo::console::error!(format!(
            "nav: {} labels but {} tickboxes; pairing the first {}",
            labels.length(),
            tickboxes.length(),
            labels.length().min(tickboxes.length())
        ));
    }

    let len = labels.length().min(tickboxes.length());
    let mut menu = Vec::with_capacity(len as usize);
    for i in 0..len {
        let label = labels
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
        let tickbox = tickboxes
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok());
        let (Some(label), Some(tickbox)) = (label, tickbox) else {
            continue;
        };
        let items = submenu_items(&label);
        menu.push(Submenu {
            tickbox,
            label,
            items,
        });
    }
    menu
}

fn submenu_items(label: &HtmlElement) -> Vec<HtmlElement> {
    let Some(holder) = label.parent_element() else {
        return Vec::new();
    };
    let Ok(anchors) = holder.query_selector_all("ul li a") else {
        return Vec::new();
    };
    let mut items = Vec::with_capacity(anchors.length() as usize);
    for i in 0..anchors.length() {
        if let Some(item) = anchors
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            items.push(item);
        }
    }
    items
}
