//! One-time census of the page structure the components drive.
//!
//! Everything is queried once at startup into typed records with stable
//! indices; the event handlers never re-query the document structurally.
//! A page that lacks some of the expected structure is not an error: the
//! affected component simply has nothing to drive.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::wrap::WrapGeometry;

pub(crate) const CLASS_HIDDEN: &str = "hidden";
pub(crate) const CLASS_AFTER_CURRENT: &str = "image-after-current";
pub(crate) const CLASS_WITH_CAPTION: &str = "with-caption";
pub(crate) const CLASS_DIAGONAL: &str = "diagonal";
pub(crate) const CLASS_RECTANGULAR: &str = "rectangular";

const DEFAULT_ROOT_FONT_SIZE_PX: f64 = 16.0;

/// One section with the image-stack elements paired to it by position.
pub(crate) struct SectionSlot {
    pub section: Element,
    pub image: HtmlElement,
    pub figure: Element,
}

/// An observed article, resolved once to the section slot that owns it.
pub(crate) struct ArticleRef {
    pub element: Element,
    pub id: String,
    pub section_index: usize,
}

pub(crate) struct PageDom {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub root: HtmlElement,
    pub slots: Vec<SectionSlot>,
    pub articles: Vec<ArticleRef>,
    pub guide: Option<HtmlElement>,
    pub toggle: Option<HtmlElement>,
}

pub(crate) fn collect(window: &Window, document: &Document) -> Result<PageDom, JsValue> {
    let body = document.body().ok_or("no body")?;
    let root = document
        .document_element()
        .ok_or("no document element")?
        .dyn_into::<HtmlElement>()?;

    let slots = collect_slots(document);
    let articles = collect_articles(document, &slots);

    let guide = document
        .get_element_by_id("text-wrap-guide")
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let toggle = document
        .get_element_by_id("layout-toggle")
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    Ok(PageDom {
        window: window.clone(),
        document: document.clone(),
        body,
        root,
        slots,
        articles,
        guide,
        toggle,
    })
}

fn collect_slots(document: &Document) -> Vec<SectionSlot> {
    let sections = document.get_elements_by_tag_name("section");
    let images = document.get_elements_by_class_name("main-image");
    let figures = document.get_elements_by_class_name("main-image-figure");

    let len = sections
        .length()
        .min(images.length())
        .min(figures.length());
    if sections.length() != len || images.length() != len || figures.length() != len {
        gloo::console::error!(format!(
            "page census: {} sections, {} images, {} figures; pairing the first {}",
            sections.length(),
            images.length(),
            figures.length(),
            len
        ));
    }

    let mut slots = Vec::with_capacity(len as usize);
    for i in 0..len {
        let (Some(section), Some(image), Some(figure)) =
            (sections.item(i), images.item(i), figures.item(i))
        else {
            break;
        };
        let Ok(image) = image.dyn_into::<HtmlElement>() else {
            gloo::console::error!(format!("page census: image {i} is not an HTML element"));
            continue;
        };
        slots.push(SectionSlot {
            section,
            image,
            figure,
        });
    }
    slots
}

fn collect_articles(document: &Document, slots: &[SectionSlot]) -> Vec<ArticleRef> {
    let articles = document.get_elements_by_tag_name("article");
    let mut refs = Vec::with_capacity(articles.length() as usize);
    for i in 0..articles.length() {
        let Some(article) = articles.item(i) else {
            break;
        };
        let id = article.id();
        if id.is_empty() {
            gloo::console::error!(format!("page census: article {i} has no id; skipping"));
            continue;
        }
        let Ok(Some(section)) = article.closest("section") else {
            gloo::console::error!(format!("page census: no section around #{id}; skipping"));
            continue;
        };
        let Some(section_index) = slots
            .iter()
            .position(|slot| slot.section.is_same_node(Some(section.as_ref())))
        else {
            gloo::console::error!(format!("page census: unregistered section around #{id}"));
            continue;
        };
        refs.push(ArticleRef {
            element: article,
            id,
            section_index,
        });
    }
    refs
}

impl PageDom {
    pub fn mark_observer_support(&self, supported: bool) {
        let classes = self.body.class_list();
        if supported {
            let _ = classes.remove_1("no-intersection-observer");
            let _ = classes.add_1("has-intersection-observer");
        } else {
            let _ = classes.remove_1("has-intersection-observer");
            let _ = classes.add_1("no-intersection-observer");
        }
    }

    pub fn article_index(&self, id: &str) -> Option<usize> {
        self.articles
            .iter()
            .find(|article| article.id == id)
            .map(|article| article.section_index)
    }

    pub fn client_width(&self) -> f64 {
        self.root.client_width() as f64
    }

    pub fn root_font_size(&self) -> f64 {
        self.window
            .get_computed_style(&self.root)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("font-size").ok())
            .and_then(|value| parse_px(&value))
            .unwrap_or(DEFAULT_ROOT_FONT_SIZE_PX)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window
            .scroll_y()
            .or_else(|_| self.window.page_y_offset())
            .unwrap_or(0.0)
    }

    pub fn wrap_geometry(&self) -> WrapGeometry {
        let viewport_height = self.root.client_height() as f64;
        WrapGeometry {
            viewport_height,
            scroll_offset: self.scroll_offset(),
            wrap_end: WrapGeometry::wrap_end_of(
                viewport_height,
                self.root.offset_height() as f64,
                self.root.scroll_height() as f64,
            ),
        }
    }
}

/// Parse a computed-style length such as `"52.8px"`.
pub(crate) fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").parse().ok()
}
