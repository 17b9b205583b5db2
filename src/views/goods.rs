use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{Page, RouteName};
use crate::views::shared::{empty_state, nav_button, page_section};

pub fn render_goods() -> Result<Element, JsValue> {
    let section = page_section(Page::Goods, "Everything currently available for booking.")?;

    let list = ElementBuilder::new("ul")?
        .class("goods-list")
        .attr("aria-live", "polite")?
        .build();
    append_child(&section, &list)?;
    append_child(&section, &empty_state("No goods to show yet.")?)?;
    append_child(&section, &nav_button(RouteName::BookingCart, "Open booking cart")?)?;

    Ok(section)
}
