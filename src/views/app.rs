// ============================================================================
// APP VIEW - Layout: header, nav y el outlet con la página actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::{Page, ResolvedRoute, Router};
use crate::views::shared::{render_header, render_nav};
use crate::views::{
    render_booking, render_contacts, render_goods, render_login, render_profile, render_register,
};

/// Atributos del `<main>` para la ruta actual
pub fn outlet_attributes(route: &ResolvedRoute) -> [(&'static str, &'static str); 2] {
    [
        ("data-route", route.name.as_str()),
        ("data-page", route.page.key()),
    ]
}

pub fn render_app(router: &Router, app_title: &str) -> Result<Element, JsValue> {
    let mut outlet = ElementBuilder::new("main")?.class("router-outlet");
    // Antes de start() no hay ruta: outlet vacío
    if let Some(route) = router.current() {
        log::debug!("🎬 [VIEW] Renderizando {:?} para {}", route.page, route.path);
        for (name, value) in outlet_attributes(&route) {
            outlet = outlet.attr(name, value)?;
        }
        outlet = outlet.child(render_page(route.page)?)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("app-layout")
        .child(render_header(app_title)?)?
        .child(render_nav(router)?)?
        .child(outlet.build())?
        .build())
}

pub fn render_page(page: Page) -> Result<Element, JsValue> {
    match page {
        Page::Login => render_login(),
        Page::Register => render_register(),
        Page::Goods => render_goods(),
        Page::Profile => render_profile(),
        Page::Booking => render_booking(),
        Page::Contacts => render_contacts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{RouteName, RouteTable};
    use crate::views::shared::section_class;
    use std::collections::HashSet;

    const LITERALS: [(&str, RouteName, &str); 6] = [
        ("/", RouteName::Login, "login"),
        ("/register", RouteName::Register, "register"),
        ("/goods", RouteName::Goods, "goods"),
        ("/profile", RouteName::Profile, "profile"),
        ("/booking", RouteName::BookingCart, "booking"),
        ("/contacts", RouteName::Contacts, "contacts"),
    ];

    #[test]
    fn outlet_is_tagged_with_the_resolved_route_and_page() {
        let table = RouteTable::app_routes().unwrap();
        for (path, name, key) in LITERALS {
            let route = table.resolve(path).unwrap();
            assert_eq!(
                outlet_attributes(&route),
                [("data-route", name.as_str()), ("data-page", key)],
                "outlet for {}",
                path
            );
            assert_eq!(section_class(route.page), format!("page page-{}", key));
        }
    }

    #[test]
    fn unknown_path_outlet_shows_login() {
        let table = RouteTable::app_routes().unwrap();
        let route = table.resolve("/unknown/path").unwrap();
        assert_eq!(
            outlet_attributes(&route),
            [("data-route", "Login"), ("data-page", "login")]
        );
    }

    #[test]
    fn every_page_has_its_own_section() {
        let table = RouteTable::app_routes().unwrap();
        let classes: HashSet<_> = table.views().map(|(_, page)| section_class(page)).collect();
        let titles: HashSet<_> = table.views().map(|(_, page)| page.title()).collect();
        assert_eq!(classes.len(), 6);
        assert_eq!(titles.len(), 6);
    }
}
