use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::Page;
use crate::views::shared::page_section;

const CONTACT_LINES: &[(&str, &str)] = &[
    ("Email", "support@example.com"),
    ("Phone", "+7 000 000-00-00"),
    ("Hours", "Mon–Fri, 9:00–18:00"),
];

pub fn render_contacts() -> Result<Element, JsValue> {
    let section = page_section(Page::Contacts, "How to reach us.")?;

    let list = ElementBuilder::new("dl")?.class("contacts-list").build();
    for (label, value) in CONTACT_LINES {
        append_child(&list, &ElementBuilder::new("dt")?.text(label).build())?;
        append_child(&list, &ElementBuilder::new("dd")?.text(value).build())?;
    }
    append_child(&section, &list)?;

    Ok(section)
}
