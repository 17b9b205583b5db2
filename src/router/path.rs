// ============================================================================
// PATH - Normalización y manejo de la base
// ============================================================================

/// Normalizar un path de aplicación: quitar query/fragmento, forzar `/` inicial
/// y colapsar segmentos vacíos (la `/` final no importa).
pub fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let joined = segments(&path[..end]).collect::<Vec<_>>().join("/");
    format!("/{}", joined)
}

/// Segmentos no vacíos de un path
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// URL base desde la que se sirve la aplicación.
///
/// Siempre empieza con `/` y nunca termina en una, salvo la raíz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Pasar un pathname del navegador a path de aplicación.
    ///
    /// Un pathname fuera de la base se devuelve normalizado y sin más cambios;
    /// no coincidirá con ninguna ruta literal.
    pub fn strip(&self, pathname: &str) -> String {
        let pathname = normalize(pathname);
        if self.is_root() {
            return pathname;
        }
        match pathname.strip_prefix(self.0.as_str()) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => pathname,
        }
    }

    /// Pasar un path de aplicación a URL del navegador
    pub fn join(&self, app_path: &str) -> String {
        let app_path = normalize(app_path);
        if self.is_root() {
            app_path
        } else if app_path == "/" {
            format!("{}/", self.0)
        } else {
            format!("{}{}", self.0, app_path)
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_slashes_query_and_fragment() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("goods"), "/goods");
        assert_eq!(normalize("/goods/"), "/goods");
        assert_eq!(normalize("//unknown///path"), "/unknown/path");
        assert_eq!(normalize("/booking?item=3#top"), "/booking");
        assert_eq!(normalize("/#/contacts"), "/");
    }

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(BasePath::new("").as_str(), "/");
        assert_eq!(BasePath::new("/").as_str(), "/");
        assert_eq!(BasePath::new("/shop/").as_str(), "/shop");
        assert_eq!(BasePath::new("shop").as_str(), "/shop");
    }

    #[test]
    fn strip_with_root_base() {
        let base = BasePath::root();
        assert_eq!(base.strip("/goods"), "/goods");
        assert_eq!(base.strip("/"), "/");
    }

    #[test]
    fn strip_with_nested_base() {
        let base = BasePath::new("/shop/");
        assert_eq!(base.strip("/shop"), "/");
        assert_eq!(base.strip("/shop/"), "/");
        assert_eq!(base.strip("/shop/goods"), "/goods");
        // Compartir prefijo no basta
        assert_eq!(base.strip("/shopping/goods"), "/shopping/goods");
        assert_eq!(base.strip("/other"), "/other");
    }

    #[test]
    fn join_with_nested_base() {
        let base = BasePath::new("/shop");
        assert_eq!(base.join("/"), "/shop/");
        assert_eq!(base.join("/booking"), "/shop/booking");
        assert_eq!(BasePath::root().join("/booking"), "/booking");
    }
}
