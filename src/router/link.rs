// ============================================================================
// LINK - Enlaces que navegan con el router en vez de recargar la página
// ============================================================================
// Los enlaces son solo markup (`data-route`). Un único listener delegado en la
// raíz de la app decide qué clicks intercepta.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::{ElementBuilder, EventListener};
use crate::router::navigator::Router;
use crate::router::route::RouteName;

/// Selector de los elementos que navegan
pub const ROUTE_SELECTOR: &str = "[data-route]";

/// Cómo fue el click, en lo que importa para interceptar enlaces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub meta_key: bool,
    pub alt_key: bool,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub button: i16,
    pub default_prevented: bool,
    pub target: Option<String>,
}

impl LinkClick {
    /// `element` es el enlace/botón encontrado, no el target original del evento
    pub fn from_event(event: &MouseEvent, element: &Element) -> Self {
        Self {
            meta_key: event.meta_key(),
            alt_key: event.alt_key(),
            ctrl_key: event.ctrl_key(),
            shift_key: event.shift_key(),
            button: event.button(),
            default_prevented: event.default_prevented(),
            target: element.get_attribute("target"),
        }
    }

    /// Click primario sin modificadores en un enlace de la misma pestaña.
    /// Todo lo demás (nueva pestaña, ya gestionado) lo maneja el navegador.
    pub fn should_intercept(&self) -> bool {
        if self.meta_key || self.alt_key || self.ctrl_key || self.shift_key {
            return false;
        }
        if self.default_prevented || self.button != 0 {
            return false;
        }
        !matches!(self.target.as_deref(), Some(t) if t.eq_ignore_ascii_case("_blank"))
    }
}

/// Ruta a la que debe navegar un click sobre un elemento con `data-route`
pub fn route_for_click(route_key: Option<&str>, click: &LinkClick) -> Option<RouteName> {
    let name = RouteName::from_key(route_key?)?;
    click.should_intercept().then_some(name)
}

/// `<a>` hacia una ruta con nombre. El activo lleva `active` + `aria-current`.
pub fn router_link(router: &Router, name: RouteName, label: &str) -> Result<Element, JsValue> {
    let href = router.href_for(name)?;
    let mut builder = ElementBuilder::new("a")?
        .class("nav-link")
        .text(label)
        .attr("href", &href)?
        .data("route", name.as_str())?;
    if router.is_active(name) {
        builder = builder.add_class("active")?.attr("aria-current", "page")?;
    }
    Ok(builder.build())
}

/// Listener delegado de clicks sobre `root`. Se registra una sola vez.
pub fn listen_for_links(root: &Element, router: Rc<Router>) -> Result<EventListener, JsValue> {
    EventListener::new(root, "click", move |event: Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(element) = route_element(event) else {
            return;
        };

        let click = LinkClick::from_event(event, &element);
        let key = element.get_attribute("data-route");
        let Some(name) = route_for_click(key.as_deref(), &click) else {
            return;
        };

        event.prevent_default();
        if let Err(e) = router.push_named(name) {
            log::error!("❌ [ROUTER] Falló la navegación a {}: {}", name, e);
        }
    })
}

fn route_element(event: &MouseEvent) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(ROUTE_SELECTOR)
        .ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_click_is_intercepted() {
        assert!(LinkClick::default().should_intercept());
    }

    #[test]
    fn modifier_keys_open_natively() {
        for click in [
            LinkClick { meta_key: true, ..Default::default() },
            LinkClick { ctrl_key: true, ..Default::default() },
            LinkClick { shift_key: true, ..Default::default() },
            LinkClick { alt_key: true, ..Default::default() },
        ] {
            assert!(!click.should_intercept(), "{:?}", click);
        }
    }

    #[test]
    fn middle_click_and_prevented_events_are_ignored() {
        assert!(!LinkClick { button: 1, ..Default::default() }.should_intercept());
        assert!(!LinkClick { default_prevented: true, ..Default::default() }.should_intercept());
    }

    #[test]
    fn blank_target_is_ignored() {
        let click = LinkClick {
            target: Some("_BLANK".to_string()),
            ..Default::default()
        };
        assert!(!click.should_intercept());
        let click = LinkClick {
            target: Some("_self".to_string()),
            ..Default::default()
        };
        assert!(click.should_intercept());
    }

    #[test]
    fn delegated_click_resolves_route_from_data_attribute() {
        let click = LinkClick::default();
        assert_eq!(route_for_click(Some("Goods"), &click), Some(RouteName::Goods));
        assert_eq!(
            route_for_click(Some("BookingCart"), &click),
            Some(RouteName::BookingCart)
        );
    }

    #[test]
    fn delegated_click_ignores_unknown_or_missing_routes() {
        let click = LinkClick::default();
        assert_eq!(route_for_click(None, &click), None);
        assert_eq!(route_for_click(Some("goods"), &click), None);
    }

    #[test]
    fn delegated_click_leaves_modified_clicks_to_the_browser() {
        let click = LinkClick { ctrl_key: true, ..Default::default() };
        assert_eq!(route_for_click(Some("Goods"), &click), None);
    }
}
