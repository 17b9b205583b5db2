// ============================================================================
// ROUTE - Registros de ruta y los tipos que los componen
// ============================================================================

use std::fmt;

use crate::router::path::{normalize, segments};

/// Identificador simbólico de ruta, único dentro de una tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Register,
    Goods,
    Profile,
    BookingCart,
    Contacts,
    NotFound,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Login => "Login",
            RouteName::Register => "Register",
            RouteName::Goods => "Goods",
            RouteName::Profile => "Profile",
            RouteName::BookingCart => "BookingCart",
            RouteName::Contacts => "Contacts",
            RouteName::NotFound => "NotFound",
        }
    }

    /// Inverso de `as_str` (valor del atributo `data-route`)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Login" => Some(RouteName::Login),
            "Register" => Some(RouteName::Register),
            "Goods" => Some(RouteName::Goods),
            "Profile" => Some(RouteName::Profile),
            "BookingCart" => Some(RouteName::BookingCart),
            "Contacts" => Some(RouteName::Contacts),
            "NotFound" => Some(RouteName::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vista de página que renderiza una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Goods,
    Profile,
    Booking,
    Contacts,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Register => "Create account",
            Page::Goods => "Goods",
            Page::Profile => "Profile",
            Page::Booking => "Booking cart",
            Page::Contacts => "Contacts",
        }
    }

    /// Clave estable de la página (clase `page-{key}`, atributo `data-page`)
    pub fn key(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::Goods => "goods",
            Page::Profile => "profile",
            Page::Booking => "booking",
            Page::Contacts => "contacts",
        }
    }
}

/// Patrón de path de un registro
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Comparación exacta por segmentos, sensible a mayúsculas
    Literal(String),
    /// Coincide con cualquier path
    CatchAll,
}

impl PathPattern {
    pub fn literal(path: &str) -> Self {
        PathPattern::Literal(normalize(path))
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Literal(literal) => segments(literal).eq(segments(path)),
            PathPattern::CatchAll => true,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, PathPattern::CatchAll)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Literal(path) => f.write_str(path),
            PathPattern::CatchAll => f.write_str("/*"),
        }
    }
}

/// Qué hace un registro cuando coincide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(Page),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: PathPattern,
    pub name: RouteName,
    pub target: RouteTarget,
}

impl RouteRecord {
    pub fn view(path: &str, name: RouteName, page: Page) -> Self {
        Self {
            path: PathPattern::literal(path),
            name,
            target: RouteTarget::View(page),
        }
    }

    pub fn redirect(path: PathPattern, name: RouteName, to: &str) -> Self {
        Self {
            path,
            name,
            target: RouteTarget::Redirect(normalize(to)),
        }
    }

    pub fn catch_all_redirect(name: RouteName, to: &str) -> Self {
        Self::redirect(PathPattern::CatchAll, name, to)
    }

    pub fn page(&self) -> Option<Page> {
        match self.target {
            RouteTarget::View(page) => Some(page),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// Resultado de resolver un path contra una tabla
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path de aplicación finalmente renderizado (tras redirecciones)
    pub path: String,
    pub name: RouteName,
    pub page: Page,
    /// Path pedido originalmente, si hubo redirección
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMES: [RouteName; 7] = [
        RouteName::Login,
        RouteName::Register,
        RouteName::Goods,
        RouteName::Profile,
        RouteName::BookingCart,
        RouteName::Contacts,
        RouteName::NotFound,
    ];

    #[test]
    fn literal_matches_exact_segments() {
        let pattern = PathPattern::literal("/goods");
        assert!(pattern.matches("/goods"));
        assert!(pattern.matches("/goods/"));
        assert!(!pattern.matches("/goods/1"));
        assert!(!pattern.matches("/Goods"));
        assert!(!pattern.matches("/"));
    }

    #[test]
    fn root_literal_matches_only_root() {
        let pattern = PathPattern::literal("/");
        assert!(pattern.matches("/"));
        assert!(pattern.matches(""));
        assert!(!pattern.matches("/register"));
    }

    #[test]
    fn catch_all_matches_everything() {
        assert!(PathPattern::CatchAll.matches("/"));
        assert!(PathPattern::CatchAll.matches("/unknown/path"));
    }

    #[test]
    fn redirect_target_is_normalized() {
        let record = RouteRecord::catch_all_redirect(RouteName::NotFound, "");
        assert_eq!(record.target, RouteTarget::Redirect("/".to_string()));
        assert_eq!(record.page(), None);
    }

    #[test]
    fn route_name_key_round_trips() {
        for name in ALL_NAMES {
            assert_eq!(RouteName::from_key(name.as_str()), Some(name));
        }
        assert_eq!(RouteName::from_key("login"), None);
        assert_eq!(RouteName::from_key(""), None);
    }
}
