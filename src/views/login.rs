// ============================================================================
// LOGIN VIEW - "/"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::append_child;
use crate::router::{Page, RouteName};
use crate::views::shared::{form_field, inert_form, nav_button, page_section};

pub fn render_login() -> Result<Element, JsValue> {
    let section = page_section(Page::Login, "Sign in to browse goods and manage your bookings.")?;

    let form = inert_form(
        "login",
        vec![
            form_field("login", "Login", "text", "Enter your login")?,
            form_field("password", "Password", "password", "Enter your password")?,
        ],
        "Sign in",
    )?;
    append_child(&section, &form)?;
    append_child(&section, &nav_button(RouteName::Register, "No account yet? Register")?)?;

    Ok(section)
}
