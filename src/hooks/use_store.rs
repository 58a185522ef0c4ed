// ============================================================================
// USE STORE HOOK - Acceso al store inyectado por contexto
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::config::{AppConfig, CONFIG};
use crate::services::{Backend, SupabaseClient};
use crate::state::AppState;
use crate::stores::Store;
use crate::viewmodels::{AuthViewModel, ResourceViewModel};

/// Lo que el `App` raíz pone en contexto: un store por carga de página
/// y el cliente del backend
#[derive(Clone)]
pub struct StoreContext {
    pub store: Store,
    pub backend: Rc<dyn Backend>,
}

impl StoreContext {
    pub fn new(store: Store, backend: Rc<dyn Backend>) -> Self {
        Self { store, backend }
    }

    /// Store vacío y cliente del backend según la configuración
    pub fn from_config(config: &AppConfig) -> Self {
        let backend: Rc<dyn Backend> = Rc::new(SupabaseClient::from_config(config));
        Self::new(Store::new(), backend)
    }

    pub fn resources(&self) -> ResourceViewModel {
        ResourceViewModel::new(self.store.clone(), self.backend.clone())
    }

    pub fn auth(&self) -> AuthViewModel {
        AuthViewModel::new(self.store.clone(), self.backend.clone())
    }
}

impl PartialEq for StoreContext {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store && Rc::ptr_eq(&self.backend, &other.backend)
    }
}

#[derive(Clone)]
pub struct UseStoreHandle {
    pub context: StoreContext,
    pub state: AppState,
}

/// El contexto del `App`; sin él, un store aislado propio del componente
/// que se crea una sola vez
fn context_or_isolated(
    provided: Option<StoreContext>,
    isolated: &mut Option<StoreContext>,
) -> StoreContext {
    match provided {
        Some(context) => context,
        None => isolated
            .get_or_insert_with(|| {
                log::error!("❌ StoreContext no encontrado: hook usado fuera de <App>, store aislado");
                StoreContext::from_config(&CONFIG)
            })
            .clone(),
    }
}

#[hook]
pub fn use_store_context() -> StoreContext {
    let isolated = use_mut_ref(|| None::<StoreContext>);
    let provided = use_context::<StoreContext>();
    let mut slot = isolated.borrow_mut();
    context_or_isolated(provided, &mut slot)
}

/// Lee el store y re-renderiza con cada dispatch.
/// La suscripción se suelta al desmontar.
#[hook]
pub fn use_store() -> UseStoreHandle {
    let context = use_store_context();
    let update = use_force_update();

    {
        let store = context.store.clone();
        use_effect_with(store, move |store| {
            let subscription = store.subscribe(move |_| update.force_update());
            move || drop(subscription)
        });
    }

    let state = context.store.get_state();
    UseStoreHandle { context, state }
}
