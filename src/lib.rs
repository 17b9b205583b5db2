// ============================================================================
// GOODS BOOKING SHELL - Arranque de la aplicación
// ============================================================================
// Una instancia de App, un router, un punto de montaje (#app).
// - router : tabla de rutas + navegación con la History API
// - views  : funciones que construyen el DOM de cada página
// - dom    : helpers DOM y listeners
// - state  : estado reactivo
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod router;
pub mod state;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 {} iniciando ({}, base {})",
        CONFIG.app_title,
        CONFIG.environment,
        CONFIG.base_url
    );

    let app = App::new()?;
    app.mount()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la app montada
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está montada"),
    });
}

/// Navegar desde JavaScript (p.ej. `navigate("/goods")`)
#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<(), JsValue> {
    let router = APP.with(|cell| cell.borrow().as_ref().map(|app| app.router().clone()));
    match router {
        Some(router) => {
            router.push(path)?;
            Ok(())
        }
        None => Err(JsValue::from_str("App is not mounted")),
    }
}
