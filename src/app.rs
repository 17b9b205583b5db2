// ============================================================================
// APP - Bootstrap: un router, un punto de montaje
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, set_document_title, EventListener};
use crate::router::link::listen_for_links;
use crate::router::{BrowserHistory, ResolvedRoute, RouteTable, Router};
use crate::views::render_app;
use crate::views::shared::listen_for_forms;

/// Id del elemento donde se monta la aplicación
pub const MOUNT_ID: &str = "app";

pub struct App {
    router: Rc<Router>,
    root: Element,
    // Listeners delegados en #app: viven lo mismo que la App
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    /// Buscar `#app` y construir el router. Si falta el ancla, es fatal.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(MOUNT_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", MOUNT_ID)))?;

        let table = RouteTable::app_routes()?;
        let router = Router::new(table, BrowserHistory::new(), CONFIG.base_path());
        log::info!(
            "🧭 [APP] Router listo: {} rutas, base {}",
            router.table().records().len(),
            router.base().as_str()
        );

        Ok(Self {
            router,
            root,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Resolver la ubicación inicial, renderizar y seguir los cambios de ruta
    pub fn mount(&self) -> Result<(), JsValue> {
        {
            let mut listeners = self.listeners.borrow_mut();
            if listeners.is_empty() {
                listeners.push(listen_for_links(&self.root, self.router.clone())?);
                listeners.push(listen_for_forms(&self.root)?);
                for listener in listeners.iter() {
                    log::debug!("👂 [APP] Listener delegado '{}' en #{}", listener.event_type(), MOUNT_ID);
                }
            } else {
                log::warn!("⚠️ [APP] mount() ya fue llamado, ignorando");
                return Ok(());
            }
        }

        let initial = self.router.start()?;
        log::info!("🚀 [APP] Ruta inicial {} ({})", initial.name, initial.path);
        self.render()?;

        self.router.subscribe(|route: &ResolvedRoute| {
            log::debug!("🔄 [APP] Ruta cambiada a {}, render programado", route.name);
            schedule_render();
        });
        Ok(())
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let view = render_app(&self.router, &CONFIG.app_title)?;
        clear_children(&self.root);
        append_child(&self.root, &view)?;

        if let Some(route) = self.router.current() {
            set_document_title(&format!("{} · {}", route.page.title(), CONFIG.app_title));
        }
        Ok(())
    }

    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }
}

thread_local! {
    static RENDER_SCHEDULED: Cell<bool> = const { Cell::new(false) };
}

/// Agrupa renders: varios cambios de ruta en el mismo tick producen uno solo
fn schedule_render() {
    if RENDER_SCHEDULED.with(|flag| flag.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_SCHEDULED.with(|flag| flag.set(false));
        crate::rerender_app();
    })
    .forget();
}
