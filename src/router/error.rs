use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::router::route::RouteName;

/// Definiciones de tabla de rutas rechazadas
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,
    #[error("route name {0} is used more than once")]
    DuplicateName(RouteName),
    #[error("catch-all route {name} at position {index} would shadow the routes after it")]
    CatchAllNotLast { name: RouteName, index: usize },
    #[error("route {name} redirects to {to}, which does not resolve to a view")]
    DanglingRedirect { name: RouteName, to: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("history operation failed: {0}")]
    Js(String),
    #[error("history state could not be encoded: {0}")]
    State(String),
}

impl From<JsValue> for HistoryError {
    fn from(value: JsValue) -> Self {
        HistoryError::Js(format!("{:?}", value))
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        HistoryError::State(value.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route matches {0}")]
    NoMatch(String),
    #[error("no view route named {0}")]
    UnknownRoute(RouteName),
    #[error("redirect loop while resolving {0}")]
    RedirectLoop(String),
    #[error(transparent)]
    History(#[from] HistoryError),
}

impl From<RouterError> for JsValue {
    fn from(value: RouterError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}

impl From<RouteTableError> for JsValue {
    fn from(value: RouteTableError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}
