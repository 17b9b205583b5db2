// ============================================================================
// BROWSER HISTORY - window.history + popstate
// ============================================================================
// URLs limpias (pushState), sin rutas con fragmento (#).
// El listener de popstate es global: se registra UNA vez. Llamadas extra a
// listen() se ignoran para no acumular listeners en window.
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{PopStateEvent, Window};

use crate::router::error::HistoryError;
use crate::router::history::{History, HistoryListener, HistoryState};

#[derive(Default)]
pub struct BrowserHistory {
    listening: Cell<bool>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn window() -> Result<Window, HistoryError> {
        web_sys::window().ok_or(HistoryError::NoWindow)
    }

    fn history() -> Result<web_sys::History, HistoryError> {
        Ok(Self::window()?.history()?)
    }

    fn current_state(&self) -> Result<HistoryState, HistoryError> {
        match self.state() {
            Some(state) => Ok(state),
            // Entrada no creada por nosotros (primera carga): inicializarla
            None => Ok(HistoryState::initial(&self.location()?)),
        }
    }

    fn encode(state: &HistoryState) -> Result<JsValue, HistoryError> {
        Ok(JsValue::from_str(&serde_json::to_string(state)?))
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Result<String, HistoryError> {
        Ok(Self::window()?.location().pathname()?)
    }

    fn state(&self) -> Option<HistoryState> {
        let raw = Self::history().ok()?.state().ok()?.as_string()?;
        serde_json::from_str(&raw).ok()
    }

    fn push(&self, url: &str) -> Result<(), HistoryError> {
        let next = self.current_state()?.pushed(url);
        log::debug!("➡️ [HISTORY] pushState {} (posición {})", url, next.position);
        Self::history()?.push_state_with_url(&Self::encode(&next)?, "", Some(url))?;
        Ok(())
    }

    fn replace(&self, url: &str) -> Result<(), HistoryError> {
        let replaced = self.current_state()?.replaced(url);
        log::debug!("🔁 [HISTORY] replaceState {}", url);
        Self::history()?.replace_state_with_url(&Self::encode(&replaced)?, "", Some(url))?;
        Ok(())
    }

    fn back(&self) -> Result<(), HistoryError> {
        Self::history()?.back()?;
        Ok(())
    }

    fn listen(&self, listener: HistoryListener) {
        if self.listening.replace(true) {
            log::warn!("⚠️ [HISTORY] Listener de popstate ya registrado, ignorando duplicado");
            return;
        }

        let window = match Self::window() {
            Ok(window) => window,
            Err(e) => {
                log::error!("❌ [HISTORY] No se puede escuchar popstate: {}", e);
                return;
            }
        };

        let closure = Closure::wrap(Box::new(move |_event: PopStateEvent| {
            match web_sys::window().map(|w| w.location().pathname()) {
                Some(Ok(pathname)) => {
                    log::info!("⏪ [HISTORY] popstate -> {}", pathname);
                    listener(pathname);
                }
                _ => log::error!("❌ [HISTORY] popstate sin location legible"),
            }
        }) as Box<dyn FnMut(PopStateEvent)>);

        if let Err(e) =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            log::error!("❌ [HISTORY] Error registrando listener de popstate: {:?}", e);
            self.listening.set(false);
            return;
        }
        // Vive lo mismo que la página
        closure.forget();
    }
}
