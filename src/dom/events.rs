// ============================================================================
// EVENT HANDLING - Listeners con dueño
// ============================================================================
// GESTIÓN DE MEMORIA:
// - closure.forget() filtra la memoria del closure para siempre: borrar el
//   elemento del DOM NO la libera. Aquí no se usa en ningún render.
// - Los listeners viven en un EventListener: mientras exista, el closure sigue
//   vivo; al hacer drop se quita del target y se libera.
// - Las vistas no registran listeners. App registra UNA VEZ listeners
//   delegados sobre #app (ver app.rs), que sobreviven a cada re-render.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Listener registrado en un target; se desregistra en drop
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("⚠️ [DOM] No se pudo quitar el listener '{}': {:?}", self.event_type, e);
        }
    }
}
