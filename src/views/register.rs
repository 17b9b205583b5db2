// ============================================================================
// REGISTER VIEW - "/register"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::append_child;
use crate::router::{Page, RouteName};
use crate::views::shared::{form_field, inert_form, nav_button, page_section};

pub fn render_register() -> Result<Element, JsValue> {
    let section = page_section(Page::Register, "Register to start booking goods.")?;

    let form = inert_form(
        "register",
        vec![
            form_field("full-name", "Full name", "text", "Your name")?,
            form_field("email", "Email", "email", "you@example.com")?,
            form_field("login", "Login", "text", "Choose a login")?,
            form_field("password", "Password", "password", "Choose a password")?,
            form_field("password-confirm", "Confirm password", "password", "Repeat the password")?,
        ],
        "Register",
    )?;
    append_child(&section, &form)?;
    append_child(&section, &nav_button(RouteName::Login, "← Back to sign in")?)?;

    Ok(section)
}
