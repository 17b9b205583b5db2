// ============================================================================
// NAV - Un enlace por ruta de vista, en el orden de la tabla
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{router_link, Router};

pub fn render_nav(router: &Router) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.class("nav-list").build();

    for (record, page) in router.table().views() {
        let link = router_link(router, record.name, page.title())?;
        let item = ElementBuilder::new("li")?.class("nav-item").child(link)?.build();
        append_child(&list, &item)?;
    }

    Ok(ElementBuilder::new("nav")?
        .class("app-nav")
        .attr("aria-label", "Main")?
        .child(list)?
        .build())
}
