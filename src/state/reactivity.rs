// ============================================================================
// REACTIVITY - Valor con subscribers notificados en cada cambio
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo: cada `set` notifica a los subscribers con el valor nuevo
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Reemplazar el valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Los borrows se sueltan antes de llamar a los callbacks: un subscriber
    // puede leer el valor o suscribirse de nuevo.
    fn notify(&self) {
        let value = self.get();
        let subscribers = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(&value);
        }
    }
}
