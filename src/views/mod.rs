// ============================================================================
// VIEWS - Funciones que construyen el DOM de cada página (sin lógica)
// ============================================================================

pub mod app;
pub mod booking;
pub mod contacts;
pub mod goods;
pub mod login;
pub mod profile;
pub mod register;
pub mod shared;

pub use app::{render_app, render_page};
pub use booking::render_booking;
pub use contacts::render_contacts;
pub use goods::render_goods;
pub use login::render_login;
pub use profile::render_profile;
pub use register::render_register;
