pub mod form;
pub mod header;
pub mod nav;

pub use form::*;
pub use header::*;
pub use nav::*;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Page;

/// Clase de la `<section>` de cada página
pub fn section_class(page: Page) -> String {
    format!("page page-{}", page.key())
}

/// `<section class="page page-{key}">` con título y texto de entrada
pub fn page_section(page: Page, lead: &str) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.class("page-title").text(page.title()).build();
    let lead = ElementBuilder::new("p")?.class("page-lead").text(lead).build();
    Ok(ElementBuilder::new("section")?
        .class(&section_class(page))
        .data("page", page.key())?
        .child(heading)?
        .child(lead)?
        .build())
}

/// Placeholder cuando una página aún no tiene nada que listar
pub fn empty_state(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("empty-state").text(message).build())
}
