use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{Page, RouteName};
use crate::views::shared::{empty_state, nav_button, page_section};

pub fn render_booking() -> Result<Element, JsValue> {
    let section = page_section(Page::Booking, "Goods you have booked.")?;

    let list = ElementBuilder::new("ul")?.class("booking-list").build();
    append_child(&section, &list)?;
    append_child(&section, &empty_state("Your booking cart is empty.")?)?;
    append_child(&section, &nav_button(RouteName::Goods, "Browse goods")?)?;

    Ok(section)
}
