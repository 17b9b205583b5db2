// ============================================================================
// ROUTE TABLE - Lista estática y ordenada de registros de ruta
// ============================================================================
// Los registros se prueban de arriba a abajo y gana el primero que coincide.
// La tabla se valida una vez al construirla y no cambia después.
// ============================================================================

use std::collections::HashSet;

use crate::router::error::{RouteTableError, RouterError};
use crate::router::path::normalize;
use crate::router::route::{Page, ResolvedRoute, RouteName, RouteRecord, RouteTarget};

/// Máximo de redirecciones encadenadas antes de abandonar la resolución
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Result<Self, RouteTableError> {
        if records.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut names = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            if !names.insert(record.name) {
                return Err(RouteTableError::DuplicateName(record.name));
            }
            if record.path.is_catch_all() && index + 1 != records.len() {
                return Err(RouteTableError::CatchAllNotLast {
                    name: record.name,
                    index,
                });
            }
        }

        let table = Self { records };
        for record in &table.records {
            if let RouteTarget::Redirect(to) = &record.target {
                if table.resolve(to).is_err() {
                    return Err(RouteTableError::DanglingRedirect {
                        name: record.name,
                        to: to.clone(),
                    });
                }
            }
        }

        Ok(table)
    }

    /// Tabla de rutas de la aplicación
    pub fn app_routes() -> Result<Self, RouteTableError> {
        Self::new(vec![
            RouteRecord::view("/", RouteName::Login, Page::Login),
            RouteRecord::view("/register", RouteName::Register, Page::Register),
            RouteRecord::view("/goods", RouteName::Goods, Page::Goods),
            RouteRecord::view("/profile", RouteName::Profile, Page::Profile),
            RouteRecord::view("/booking", RouteName::BookingCart, Page::Booking),
            RouteRecord::view("/contacts", RouteName::Contacts, Page::Contacts),
            RouteRecord::catch_all_redirect(RouteName::NotFound, "/"),
        ])
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Primer registro cuyo patrón coincide con `path`
    pub fn match_path(&self, path: &str) -> Option<&RouteRecord> {
        let path = normalize(path);
        self.records.iter().find(|record| record.path.matches(&path))
    }

    /// Resolver `path` a la vista que renderiza, siguiendo redirecciones
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, RouterError> {
        let requested = normalize(path);
        let mut current = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let record = self
                .match_path(&current)
                .ok_or_else(|| RouterError::NoMatch(current.clone()))?;

            match &record.target {
                RouteTarget::View(page) => {
                    let redirected_from = (current != requested).then_some(requested);
                    return Ok(ResolvedRoute {
                        path: current,
                        name: record.name,
                        page: *page,
                        redirected_from,
                    });
                }
                RouteTarget::Redirect(to) => {
                    log::debug!("↪️ [ROUTER] {} redirects {} -> {}", record.name, current, to);
                    current = to.clone();
                }
            }
        }

        Err(RouterError::RedirectLoop(requested))
    }

    /// Path literal del registro de vista llamado `name`
    pub fn path_for(&self, name: RouteName) -> Result<String, RouterError> {
        self.records
            .iter()
            .find(|record| record.name == name && record.page().is_some())
            .map(|record| record.path.to_string())
            .ok_or(RouterError::UnknownRoute(name))
    }

    /// Registros de vista en orden de tabla (de ellos salen los enlaces del nav)
    pub fn views(&self) -> impl Iterator<Item = (&RouteRecord, Page)> {
        self.records
            .iter()
            .filter_map(|record| record.page().map(|page| (record, page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::PathPattern;

    const LITERALS: [(&str, RouteName, Page); 6] = [
        ("/", RouteName::Login, Page::Login),
        ("/register", RouteName::Register, Page::Register),
        ("/goods", RouteName::Goods, Page::Goods),
        ("/profile", RouteName::Profile, Page::Profile),
        ("/booking", RouteName::BookingCart, Page::Booking),
        ("/contacts", RouteName::Contacts, Page::Contacts),
    ];

    fn table() -> RouteTable {
        RouteTable::app_routes().expect("app routes are valid")
    }

    #[test]
    fn each_literal_path_resolves_to_its_own_view() {
        let table = table();
        for (path, name, page) in LITERALS {
            let resolved = table.resolve(path).unwrap();
            assert_eq!(resolved.name, name, "name for {}", path);
            assert_eq!(resolved.page, page, "page for {}", path);
            assert_eq!(resolved.path, path);
            assert!(!resolved.was_redirected());
        }
    }

    #[test]
    fn unknown_paths_redirect_to_root() {
        let table = table();
        for path in ["/unknown/path", "/goods/42", "/Goods", "/admin", "/registerx"] {
            let resolved = table.resolve(path).unwrap();
            assert_eq!(resolved.path, "/", "path for {}", path);
            assert_eq!(resolved.page, Page::Login);
            assert_eq!(resolved.redirected_from.as_deref(), Some(path));
        }
    }

    #[test]
    fn trailing_slash_and_query_do_not_affect_matching() {
        let table = table();
        assert_eq!(table.resolve("/goods/").unwrap().page, Page::Goods);
        assert_eq!(table.resolve("/booking?id=7").unwrap().page, Page::Booking);
    }

    #[test]
    fn app_route_names_are_distinct() {
        let table = table();
        let names: HashSet<_> = table.records().iter().map(|r| r.name).collect();
        assert_eq!(names.len(), table.records().len());
    }

    #[test]
    fn app_catch_all_is_last() {
        let table = table();
        let last = table.records().last().unwrap();
        assert!(last.path.is_catch_all());
        assert!(table.records()[..table.records().len() - 1]
            .iter()
            .all(|r| !r.path.is_catch_all()));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = RouteTable::new(vec![
            RouteRecord::view("/", RouteName::Login, Page::Login),
            RouteRecord::view("/login", RouteName::Login, Page::Login),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName(RouteName::Login));
    }

    #[test]
    fn catch_all_before_specific_route_is_rejected() {
        let err = RouteTable::new(vec![
            RouteRecord::view("/", RouteName::Login, Page::Login),
            RouteRecord::catch_all_redirect(RouteName::NotFound, "/"),
            RouteRecord::view("/goods", RouteName::Goods, Page::Goods),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::CatchAllNotLast {
                name: RouteName::NotFound,
                index: 1
            }
        );
    }

    #[test]
    fn misplaced_catch_all_would_shadow_later_routes() {
        // Sin validar: lo que pasaría si el catch-all no fuera el último
        let shadowed = RouteTable {
            records: vec![
                RouteRecord::view("/", RouteName::Login, Page::Login),
                RouteRecord::catch_all_redirect(RouteName::NotFound, "/"),
                RouteRecord::view("/goods", RouteName::Goods, Page::Goods),
            ],
        };
        assert_eq!(shadowed.match_path("/goods").unwrap().name, RouteName::NotFound);
        assert_eq!(table().match_path("/goods").unwrap().name, RouteName::Goods);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(RouteTable::new(Vec::new()).unwrap_err(), RouteTableError::Empty);
    }

    #[test]
    fn dangling_redirect_is_rejected() {
        let err = RouteTable::new(vec![
            RouteRecord::view("/goods", RouteName::Goods, Page::Goods),
            RouteRecord::catch_all_redirect(RouteName::NotFound, "/"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DanglingRedirect {
                name: RouteName::NotFound,
                to: "/".to_string()
            }
        );
    }

    #[test]
    fn redirect_loop_is_detected() {
        let table = RouteTable {
            records: vec![
                RouteRecord::redirect(PathPattern::literal("/a"), RouteName::Goods, "/b"),
                RouteRecord::redirect(PathPattern::literal("/b"), RouteName::Profile, "/a"),
            ],
        };
        assert_eq!(
            table.resolve("/a").unwrap_err(),
            RouterError::RedirectLoop("/a".to_string())
        );
    }

    #[test]
    fn path_for_finds_view_records_only() {
        let table = table();
        assert_eq!(table.path_for(RouteName::BookingCart).unwrap(), "/booking");
        assert_eq!(table.path_for(RouteName::Login).unwrap(), "/");
        assert_eq!(
            table.path_for(RouteName::NotFound).unwrap_err(),
            RouterError::UnknownRoute(RouteName::NotFound)
        );
    }

    #[test]
    fn views_lists_the_six_pages_in_order() {
        let pages: Vec<_> = table().views().map(|(_, page)| page).collect();
        assert_eq!(
            pages,
            vec![
                Page::Login,
                Page::Register,
                Page::Goods,
                Page::Profile,
                Page::Booking,
                Page::Contacts
            ]
        );
    }
}
