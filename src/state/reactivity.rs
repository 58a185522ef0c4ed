// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Cada `subscribe` devuelve una `Subscription`; al hacer drop se da de baja.
// Nada se queda registrado esperando al GC.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Listener<A> = Rc<dyn Fn(&A)>;

struct Registry<A> {
    next_id: u64,
    listeners: Vec<(u64, Listener<A>)>,
}

/// Lista de callbacks interesados en valores de tipo `A`
pub struct Subscribers<A> {
    registry: Rc<RefCell<Registry<A>>>,
}

impl<A: 'static> Subscribers<A> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&A) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Rc::new(callback)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().listeners.retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista antes: un callback puede suscribir o soltar otros.
    pub fn notify(&self, value: &A) {
        let listeners: Vec<Listener<A>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: 'static> Default for Subscribers<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Los clones comparten la misma lista
impl<A> Clone for Subscribers<A> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

/// Registro activo; se libera al hacer drop
#[must_use = "la suscripción se cancela en cuanto se suelta"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
