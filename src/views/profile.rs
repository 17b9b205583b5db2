use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{Page, RouteName};
use crate::views::shared::{nav_button, page_section};

const PROFILE_FIELDS: &[&str] = &["Full name", "Email", "Login"];

pub fn render_profile() -> Result<Element, JsValue> {
    let section = page_section(Page::Profile, "Your account details.")?;

    let details = ElementBuilder::new("dl")?.class("profile-details").build();
    for field in PROFILE_FIELDS {
        append_child(&details, &ElementBuilder::new("dt")?.text(field).build())?;
        append_child(&details, &ElementBuilder::new("dd")?.class("profile-value").text("—").build())?;
    }
    append_child(&section, &details)?;
    append_child(&section, &nav_button(RouteName::BookingCart, "My bookings")?)?;

    Ok(section)
}
