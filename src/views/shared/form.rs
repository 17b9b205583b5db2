// ============================================================================
// FORM - Markup de formularios y botones de navegación
// ============================================================================
// Sin listeners propios: el submit lo atiende listen_for_forms (delegado en
// #app) y los botones `data-route` el listener de enlaces del router.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::dom::{ElementBuilder, EventListener};
use crate::router::RouteName;

/// Label + input dentro de un `.form-group`
pub fn form_field(id: &str, label: &str, input_type: &str, placeholder: &str) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    let input = ElementBuilder::new("input")?
        .attr("id", id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("required", "")?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input)?
        .build())
}

/// Formulario cuyo envío se queda en la página; `data-form` solo etiqueta el log
pub fn inert_form(form_name: &str, fields: Vec<Element>, submit_label: &str) -> Result<Element, JsValue> {
    let submit = ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .text(submit_label)
        .build();
    Ok(ElementBuilder::new("form")?
        .class(&format!("{}-form", form_name))
        .data("form", form_name)?
        .children(fields)?
        .child(submit)?
        .build())
}

/// Botón que navega a una ruta con nombre
pub fn nav_button(name: RouteName, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn-link")
        .attr("type", "button")?
        .data("route", name.as_str())?
        .text(label)
        .build())
}

/// Listener delegado de submit sobre `root`. Se registra una sola vez.
pub fn listen_for_forms(root: &Element) -> Result<EventListener, JsValue> {
    EventListener::new(root, "submit", |event: Event| {
        let form = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.get_attribute("data-form"));
        if let Some(form) = form {
            event.prevent_default();
            log::info!("📝 [VIEW] Formulario {} enviado", form);
        }
    })
}
