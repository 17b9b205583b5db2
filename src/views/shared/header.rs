use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

pub fn render_header(app_title: &str) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?.class("app-title").text(app_title).build();
    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(title)?
        .build())
}
