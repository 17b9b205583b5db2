// ============================================================================
// HISTORY - Frontera entre el router y la barra de direcciones
// ============================================================================
// BrowserHistory usa window.history; MemoryHistory cumple el mismo contrato
// en memoria (ejecución fuera del navegador y tests).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::router::error::HistoryError;

/// Recibe la nueva ubicación cada vez que el usuario se mueve por el historial
pub type HistoryListener = Box<dyn Fn(String)>;

/// Estado guardado junto a cada entrada del historial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub position: usize,
    pub current: String,
    pub back: Option<String>,
}

impl HistoryState {
    pub fn initial(location: &str) -> Self {
        Self {
            position: 0,
            current: location.to_string(),
            back: None,
        }
    }

    /// Estado de una entrada apilada encima de `self`
    pub fn pushed(&self, url: &str) -> Self {
        Self {
            position: self.position + 1,
            current: url.to_string(),
            back: Some(self.current.clone()),
        }
    }

    /// Estado de `self` reemplazado en su sitio por `url`
    pub fn replaced(&self, url: &str) -> Self {
        Self {
            position: self.position,
            current: url.to_string(),
            back: self.back.clone(),
        }
    }
}

pub trait History {
    /// Ubicación actual (pathname del navegador, con la base)
    fn location(&self) -> Result<String, HistoryError>;

    /// Estado de la entrada actual, si la escribió este router
    fn state(&self) -> Option<HistoryState>;

    /// Agregar una entrada nueva
    fn push(&self, url: &str) -> Result<(), HistoryError>;

    /// Sobrescribir la entrada actual
    fn replace(&self, url: &str) -> Result<(), HistoryError>;

    /// Retroceder una entrada; los listeners se notifican tras el movimiento
    fn back(&self) -> Result<(), HistoryError>;

    fn listen(&self, listener: HistoryListener);
}

impl<H: History + ?Sized> History for Rc<H> {
    fn location(&self) -> Result<String, HistoryError> {
        (**self).location()
    }

    fn state(&self) -> Option<HistoryState> {
        (**self).state()
    }

    fn push(&self, url: &str) -> Result<(), HistoryError> {
        (**self).push(url)
    }

    fn replace(&self, url: &str) -> Result<(), HistoryError> {
        (**self).replace(url)
    }

    fn back(&self) -> Result<(), HistoryError> {
        (**self).back()
    }

    fn listen(&self, listener: HistoryListener) {
        (**self).listen(listener)
    }
}

/// Pila de historial en memoria
pub struct MemoryHistory {
    entries: RefCell<Vec<HistoryState>>,
    index: RefCell<usize>,
    listeners: RefCell<Vec<HistoryListener>>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![HistoryState::initial(initial)]),
            index: RefCell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Ubicaciones de todas las entradas, la más antigua primero
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.current.clone())
            .collect()
    }

    pub fn index(&self) -> usize {
        *self.index.borrow()
    }

    fn current_entry(&self) -> HistoryState {
        self.entries.borrow()[self.index()].clone()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Result<String, HistoryError> {
        Ok(self.current_entry().current)
    }

    fn state(&self) -> Option<HistoryState> {
        Some(self.current_entry())
    }

    fn push(&self, url: &str) -> Result<(), HistoryError> {
        let next = self.current_entry().pushed(url);
        let index = self.index();
        let mut entries = self.entries.borrow_mut();
        // Un push descarta las entradas hacia adelante
        entries.truncate(index + 1);
        entries.push(next);
        *self.index.borrow_mut() = index + 1;
        Ok(())
    }

    fn replace(&self, url: &str) -> Result<(), HistoryError> {
        let replaced = self.current_entry().replaced(url);
        let index = self.index();
        self.entries.borrow_mut()[index] = replaced;
        Ok(())
    }

    fn back(&self) -> Result<(), HistoryError> {
        let index = self.index();
        if index == 0 {
            log::debug!("⏮️ [HISTORY] Ya en la primera entrada");
            return Ok(());
        }
        *self.index.borrow_mut() = index - 1;

        let location = self.location()?;
        for listener in self.listeners.borrow().iter() {
            listener(location.clone());
        }
        Ok(())
    }

    fn listen(&self, listener: HistoryListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_tracks_position_and_back_link() {
        let history = MemoryHistory::new("/");
        history.push("/goods").unwrap();
        let state = history.state().unwrap();
        assert_eq!(state.position, 1);
        assert_eq!(state.current, "/goods");
        assert_eq!(state.back.as_deref(), Some("/"));
    }

    #[test]
    fn replace_keeps_position() {
        let history = MemoryHistory::new("/nowhere");
        history.replace("/").unwrap();
        assert_eq!(history.entries(), vec!["/"]);
        assert_eq!(history.state().unwrap().position, 0);
    }

    #[test]
    fn back_notifies_listeners_with_previous_location() {
        let history = MemoryHistory::new("/");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        history.listen(Box::new(move |location| sink.borrow_mut().push(location)));

        history.push("/booking").unwrap();
        history.back().unwrap();

        assert_eq!(history.location().unwrap(), "/");
        assert_eq!(*seen.borrow(), vec!["/".to_string()]);
    }

    #[test]
    fn back_from_first_entry_is_a_no_op() {
        let history = MemoryHistory::new("/");
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        history.listen(Box::new(move |_| *counter.borrow_mut() += 1));

        history.back().unwrap();

        assert_eq!(history.index(), 0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/goods").unwrap();
        history.push("/profile").unwrap();
        history.back().unwrap();
        history.push("/contacts").unwrap();
        assert_eq!(history.entries(), vec!["/", "/goods", "/contacts"]);
    }

    #[test]
    fn history_state_serializes_for_the_browser() {
        let state = HistoryState::initial("/").pushed("/goods");
        let json = serde_json::to_string(&state).unwrap();
        let back: HistoryState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
