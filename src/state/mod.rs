// ============================================================================
// STATE MODULE - Estado con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;

pub use reactivity::*;
