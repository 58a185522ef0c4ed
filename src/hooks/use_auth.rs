// ============================================================================
// USE AUTH HOOKS - Estado de auth + listener de eventos (solo en la raíz)
// ============================================================================

use yew::prelude::*;
use crate::state::AuthState;
use super::use_store::{use_store, use_store_context};

#[derive(Clone)]
pub struct UseAuthHandle {
    pub state: AuthState,
    pub sign_in: Callback<(String, String)>,
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_auth_state() -> UseAuthHandle {
    let handle = use_store();

    let sign_in = {
        let context = handle.context.clone();
        Callback::from(move |(email, password): (String, String)| {
            let vm = context.auth();
            wasm_bindgen_futures::spawn_local(async move {
                // El resultado llega por el evento SignedIn
                let _ = vm.sign_in(&email, &password).await;
            });
        })
    };

    let sign_out = {
        let context = handle.context.clone();
        Callback::from(move |_| {
            let vm = context.auth();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.sign_out().await {
                    log::warn!("⚠️ Logout remoto falló (sesión local ya limpia): {}", e);
                }
            });
        })
    };

    UseAuthHandle {
        state: handle.state.auth,
        sign_in,
        sign_out,
    }
}

/// Hidrata la sesión al montar y mantiene la suscripción a eventos de
/// auth hasta desmontar
#[hook]
pub fn use_auth_listener() {
    // Sin use_store: este hook no necesita re-renderizar con cada dispatch
    let context = use_store_context();

    use_effect_with(context, move |context| {
        let vm = context.auth();

        {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.fetch_session_and_profile().await;
            });
        }

        let subscription = vm.listen(|event, session, vm| {
            wasm_bindgen_futures::spawn_local(async move {
                vm.handle_auth_event(event, session).await;
            });
        });
        log::info!("🔌 Listener de auth registrado");

        move || {
            drop(subscription);
            log::info!("🔌 Listener de auth liberado");
        }
    });
}
