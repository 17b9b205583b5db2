// ============================================================================
// ROUTER - Ruta actual + navegación sobre un backend History
// ============================================================================
// El único estado es la "ruta actual": None hasta start(), después lo que
// resolvió la última navegación. Las redirecciones reemplazan la entrada del
// historial en vez de agregar otra.
// ============================================================================

use std::rc::Rc;

use crate::router::error::RouterError;
use crate::router::history::History;
use crate::router::path::BasePath;
use crate::router::route::{ResolvedRoute, RouteName};
use crate::router::table::RouteTable;
use crate::state::ReactiveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
    Push,
    Replace,
}

pub struct Router {
    table: RouteTable,
    history: Box<dyn History>,
    base: BasePath,
    current: ReactiveState<Option<ResolvedRoute>>,
}

impl Router {
    /// Crear el router y engancharlo a los eventos atrás/adelante del historial
    pub fn new<H>(table: RouteTable, history: H, base: BasePath) -> Rc<Self>
    where
        H: History + 'static,
    {
        let router = Rc::new(Self {
            table,
            history: Box::new(history),
            base,
            current: ReactiveState::new(None),
        });

        let weak = Rc::downgrade(&router);
        router.history.listen(Box::new(move |location| {
            let Some(router) = weak.upgrade() else {
                return;
            };
            if let Err(e) = router.sync_from_location(&location) {
                log::error!("❌ [ROUTER] Error siguiendo el historial a {}: {}", location, e);
            }
        }));

        router
    }

    /// Navegación inicial: resolver la ubicación con la que se cargó la página
    pub fn start(&self) -> Result<ResolvedRoute, RouterError> {
        let location = self.history.location()?;
        log::info!("🧭 [ROUTER] Iniciando en {} (base {})", location, self.base.as_str());
        self.sync_from_location(&location)
    }

    /// Navegar a `to` agregando una entrada al historial
    pub fn push(&self, to: &str) -> Result<ResolvedRoute, RouterError> {
        self.navigate(to, NavigationType::Push)
    }

    /// Navegar a `to` sobrescribiendo la entrada actual
    pub fn replace(&self, to: &str) -> Result<ResolvedRoute, RouterError> {
        self.navigate(to, NavigationType::Replace)
    }

    pub fn push_named(&self, name: RouteName) -> Result<ResolvedRoute, RouterError> {
        let path = self.table.path_for(name)?;
        self.push(&path)
    }

    pub fn back(&self) -> Result<(), RouterError> {
        self.history.back()?;
        Ok(())
    }

    pub fn current(&self) -> Option<ResolvedRoute> {
        self.current.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&ResolvedRoute) + 'static,
    {
        self.current.subscribe(move |route| {
            if let Some(route) = route {
                callback(route);
            }
        });
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// URL de navegador de una ruta con nombre (href de los enlaces)
    pub fn href_for(&self, name: RouteName) -> Result<String, RouterError> {
        Ok(self.base.join(&self.table.path_for(name)?))
    }

    pub fn is_active(&self, name: RouteName) -> bool {
        self.current().is_some_and(|route| route.name == name)
    }

    fn navigate(&self, to: &str, kind: NavigationType) -> Result<ResolvedRoute, RouterError> {
        let resolved = self.table.resolve(to)?;

        if let Some(current) = self.current() {
            if current.path == resolved.path {
                log::debug!("🧭 [ROUTER] Ya en {}, navegación omitida", current.path);
                return Ok(current);
            }
        }

        if let Some(from) = &resolved.redirected_from {
            log::info!("↪️ [ROUTER] {} redirigido a {}", from, resolved.path);
        }

        let url = self.base.join(&resolved.path);
        match kind {
            NavigationType::Push => self.history.push(&url)?,
            NavigationType::Replace => self.history.replace(&url)?,
        }

        log::info!("🧭 [ROUTER] {:?} {} -> {}", kind, resolved.path, resolved.name);
        self.commit(resolved.clone());
        Ok(resolved)
    }

    /// Adoptar la ubicación en la que ya está el navegador (carga, atrás/adelante)
    fn sync_from_location(&self, location: &str) -> Result<ResolvedRoute, RouterError> {
        let app_path = self.base.strip(location);
        let resolved = self.table.resolve(&app_path)?;

        if resolved.was_redirected() {
            log::info!("↪️ [ROUTER] {} redirigido a {}", app_path, resolved.path);
            self.history.replace(&self.base.join(&resolved.path))?;
        }

        log::info!("🧭 [ROUTER] Ahora en {} -> {}", resolved.path, resolved.name);
        self.commit(resolved.clone());
        Ok(resolved)
    }

    fn commit(&self, resolved: ResolvedRoute) {
        self.current.set(Some(resolved));
    }
}
