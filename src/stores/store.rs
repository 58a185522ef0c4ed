// ============================================================================
// STORE - Contenedor único de estado (uno por carga de página)
// ============================================================================
// Se construye explícitamente y se inyecta en el árbol de UI por contexto.
// `dispatch` es la única vía de mutación; `get_state` devuelve una copia.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::state::{Action, AppState, Subscribers, Subscription};

#[derive(Clone)]
pub struct Store {
    state: Rc<RefCell<AppState>>,
    subscribers: Subscribers<AppState>,
    request_counter: Rc<Cell<u64>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            subscribers: Subscribers::new(),
            request_counter: Rc::new(Cell::new(0)),
        }
    }

    /// Aplica la acción y notifica con el estado nuevo
    pub fn dispatch(&self, action: Action) {
        log::debug!("📨 dispatch [{}]", action.slice_name());
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.reduce(action);
            state.clone()
        };
        self.subscribers.notify(&snapshot);
    }

    /// Copia inmutable del estado actual
    pub fn get_state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Lectura sin copiar el estado completo
    pub fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        selector(&self.state.borrow())
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AppState) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Id monótono para cada petición despachada
    pub fn next_request_id(&self) -> u64 {
        let next = self.request_counter.get() + 1;
        self.request_counter.set(next);
        next
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.subscribers.len())
            .field("requests", &self.request_counter.get())
            .finish()
    }
}
