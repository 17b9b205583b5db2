// ============================================================================
// ROUTER MODULE - Routing en el cliente sobre la History API
// ============================================================================
// route     : registros de ruta (patrón, nombre, destino)
// table     : tabla ordenada y validada; gana la primera coincidencia
// history   : trait History + backend en memoria
// browser   : backend window.history (pushState / popstate)
// navigator : Router (ruta actual, navegación, subscribers)
// link      : enlaces <a> + listener delegado de clicks
// ============================================================================

pub mod browser;
pub mod error;
pub mod history;
pub mod link;
pub mod navigator;
pub mod path;
pub mod route;
pub mod table;

pub use browser::BrowserHistory;
pub use navigator::{NavigationType, Router};
pub use error::{HistoryError, RouteTableError, RouterError};
pub use history::{History, HistoryListener, HistoryState, MemoryHistory};
pub use link::{router_link, LinkClick};
pub use path::BasePath;
pub use route::{Page, PathPattern, ResolvedRoute, RouteName, RouteRecord, RouteTarget};
pub use table::RouteTable;
