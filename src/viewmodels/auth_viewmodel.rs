// ============================================================================
// AUTH VIEWMODEL - Hidratación de sesión, perfil y eventos de auth
// ============================================================================

use std::rc::Rc;
use crate::error::FetchError;
use crate::models::{decode_rows, AuthEvent, Profile, Query, Record, Session, User};
use crate::services::Backend;
use crate::state::{Action, AuthAction, Subscription};
use crate::stores::Store;

#[derive(Clone)]
pub struct AuthViewModel {
    store: Store,
    backend: Rc<dyn Backend>,
}

/// Resultado de la comprobación de sesión
#[derive(Default)]
struct SessionLookup {
    session: Option<Session>,
    user: Option<User>,
    profile: Option<Profile>,
    error: Option<String>,
}

impl AuthViewModel {
    pub fn new(store: Store, backend: Rc<dyn Backend>) -> Self {
        Self { store, backend }
    }

    /// Lee la sesión, el usuario y su perfil. Siempre termina con
    /// `hydrated = true`, haya sesión, no la haya o falle algo.
    pub async fn fetch_session_and_profile(&self) {
        let request = self.store.next_request_id();
        self.store
            .dispatch(Action::Auth(AuthAction::SessionPending { request }));

        let lookup = self.lookup_session().await;
        if let Some(ref error) = lookup.error {
            log::error!("❌ [auth] {}", error);
        }

        self.store.dispatch(Action::Auth(AuthAction::SessionResolved {
            request,
            session: lookup.session,
            user: lookup.user,
            profile: lookup.profile,
            error: lookup.error,
        }));
    }

    async fn lookup_session(&self) -> SessionLookup {
        let session = match self.backend.get_session().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                log::info!("ℹ️ [auth] sin sesión activa");
                return SessionLookup::default();
            }
            Err(e) => {
                return SessionLookup {
                    error: Some(e.user_message()),
                    ..SessionLookup::default()
                };
            }
        };

        // Usuario verificado por el servidor; si no responde, el de la sesión
        let user = match self.backend.get_user().await {
            Ok(Some(user)) => user,
            Ok(None) => session.user.clone(),
            Err(e) => {
                log::warn!("⚠️ [auth] get_user falló, se usa el usuario de la sesión: {}", e);
                session.user.clone()
            }
        };

        let (profile, error) = match self.fetch_profile(&user.id).await {
            Ok(profile) => (profile, None),
            Err(e) => (None, Some(e.user_message())),
        };

        log::info!("✅ [auth] sesión de {}", user.email.as_deref().unwrap_or(&user.id));
        SessionLookup {
            session: Some(session),
            user: Some(user),
            profile,
            error,
        }
    }

    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, FetchError> {
        let query = Query::table(Profile::TABLE).eq("id", user_id);
        let rows = self.backend.select(&query).await?;
        Ok(decode_rows::<Profile>(rows)?.into_iter().next())
    }

    pub fn set_auth_state(&self, session: Option<Session>, user: Option<User>) {
        let request = self.store.next_request_id();
        self.store
            .dispatch(Action::Auth(AuthAction::SetAuthState { request, session, user }));
    }

    pub fn clear_profile(&self) {
        let request = self.store.next_request_id();
        self.store
            .dispatch(Action::Auth(AuthAction::ClearProfile { request }));
    }

    /// Reacción a un evento del proveedor de auth
    pub async fn handle_auth_event(&self, event: AuthEvent, session: Option<Session>) {
        let user = session.as_ref().map(|s| s.user.clone());
        let profile_matches = self.store.select(|state| {
            match (&state.auth.profile, &user) {
                (Some(profile), Some(user)) => profile.id == user.id,
                _ => false,
            }
        });

        self.set_auth_state(session.clone(), user);

        match (event, session) {
            (AuthEvent::SignedOut, _) | (_, None) => self.clear_profile(),
            (AuthEvent::SignedIn, Some(_)) | (AuthEvent::UserUpdated, Some(_)) => {
                self.fetch_session_and_profile().await
            }
            (AuthEvent::TokenRefreshed, Some(_)) if !profile_matches => {
                self.fetch_session_and_profile().await
            }
            (AuthEvent::TokenRefreshed, Some(_)) => {}
        }
    }

    /// Escucha los eventos de auth mientras viva la `Subscription`
    pub fn listen<F>(&self, spawn: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<Session>, AuthViewModel) + 'static,
    {
        let vm = self.clone();
        self.backend
            .on_auth_state_change(Box::new(move |event, session| spawn(event, session, vm.clone())))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), FetchError> {
        match self.backend.sign_in_with_password(email, password).await {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("❌ [auth] login fallido: {}", e);
                Err(e)
            }
        }
    }

    /// El estado local se limpia aunque el backend falle
    pub async fn sign_out(&self) -> Result<(), FetchError> {
        let result = self.backend.sign_out().await;
        self.set_auth_state(None, None);
        self.clear_profile();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use futures::executor::block_on;
    use futures::task::noop_waker_ref;
    use serde_json::json;
    use crate::models::Role;
    use crate::services::fake_backend::FakeBackend;
    use crate::state::selectors;

    fn setup() -> (Store, Rc<FakeBackend>, AuthViewModel) {
        let store = Store::new();
        let backend = Rc::new(FakeBackend::new());
        let vm = AuthViewModel::new(store.clone(), backend.clone());
        (store, backend, vm)
    }

    fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
        let mut cx = Context::from_waker(noop_waker_ref());
        future.poll(&mut cx)
    }

    fn admin_profile(id: &str) -> serde_json::Value {
        json!({"id": id, "role": "admin", "full_name": "Admin Pusat"})
    }

    #[test]
    fn hydrates_without_a_session() {
        let (store, backend, vm) = setup();

        block_on(vm.fetch_session_and_profile());

        let auth = store.get_state().auth;
        assert!(auth.hydrated);
        assert!(!auth.loading);
        assert_eq!(auth.session, None);
        assert_eq!(auth.error, None);
        assert!(backend.queries.borrow().is_empty());
    }

    #[test]
    fn loads_session_user_and_profile() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        backend.reply("profiles", Ok(vec![admin_profile("u1")]));

        block_on(vm.fetch_session_and_profile());

        let auth = store.get_state().auth;
        assert!(auth.hydrated);
        assert_eq!(auth.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(auth.profile.as_ref().map(|p| p.role), Some(Role::Admin));
        assert_eq!(
            backend.queries.borrow()[0].to_query_string(),
            "select=*&id=eq.u1"
        );
    }

    #[test]
    fn prefers_the_server_verified_user() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        *backend.user.borrow_mut() = Ok(Some(User {
            id: "u1".into(),
            email: Some("verified@pordasi.id".into()),
        }));

        block_on(vm.fetch_session_and_profile());

        let auth = store.get_state().auth;
        assert_eq!(*backend.get_user_calls.borrow(), 1);
        assert_eq!(
            auth.user.and_then(|u| u.email).as_deref(),
            Some("verified@pordasi.id")
        );
    }

    #[test]
    fn profile_failure_still_releases_hydration() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        backend.reply("profiles", Err(FetchError::Backend("permission denied".into())));

        block_on(vm.fetch_session_and_profile());

        let auth = store.get_state().auth;
        assert!(auth.hydrated);
        assert!(!auth.loading);
        assert!(auth.session.is_some());
        assert_eq!(auth.profile, None);
        assert_eq!(auth.error.as_deref(), Some("permission denied"));
    }

    #[test]
    fn session_failure_still_releases_hydration() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Err(FetchError::Network("offline".into()));

        block_on(vm.fetch_session_and_profile());

        let auth = store.get_state().auth;
        assert!(auth.hydrated);
        assert_eq!(auth.session, None);
        assert_eq!(auth.error.as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn hydration_flips_exactly_once() {
        let (store, _backend, vm) = setup();
        let flips = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let flips = flips.clone();
            store.subscribe(move |state| {
                let mut flips = flips.borrow_mut();
                if flips.last() != Some(&state.auth.hydrated) {
                    flips.push(state.auth.hydrated);
                }
            })
        };

        block_on(vm.fetch_session_and_profile());
        block_on(vm.fetch_session_and_profile());

        assert_eq!(*flips.borrow(), vec![false, true]);
    }

    #[test]
    fn sign_in_event_loads_the_profile() {
        let (store, backend, vm) = setup();
        backend.reply("profiles", Ok(vec![admin_profile("admin@pordasi.id")]));

        let pending = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let pending = pending.clone();
            vm.listen(move |event, session, _vm| pending.borrow_mut().push((event, session)))
        };

        block_on(vm.sign_in("admin@pordasi.id", "secret")).unwrap();
        let events: Vec<_> = pending.borrow_mut().drain(..).collect();
        for (event, session) in events {
            block_on(vm.handle_auth_event(event, session));
        }

        let auth = store.get_state().auth;
        assert!(auth.session.is_some());
        assert_eq!(auth.profile.map(|p| p.role), Some(Role::Admin));
        drop(subscription);
        assert_eq!(backend.listener_count(), 0);
    }

    #[test]
    fn wrong_password_surfaces_backend_message() {
        let (store, _backend, vm) = setup();
        let result = block_on(vm.sign_in("admin@pordasi.id", "nope"));
        assert_eq!(
            result,
            Err(FetchError::Backend("Invalid login credentials".into()))
        );
        assert_eq!(store.get_state().auth.session, None);
    }

    #[test]
    fn sign_out_clears_session_and_profile() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        backend.reply("profiles", Ok(vec![admin_profile("u1")]));
        block_on(vm.fetch_session_and_profile());
        assert!(store.get_state().auth.profile.is_some());

        block_on(vm.sign_out()).unwrap();

        let auth = store.get_state().auth;
        assert_eq!(auth.session, None);
        assert_eq!(auth.user, None);
        assert_eq!(auth.profile, None);
        assert!(auth.hydrated);
    }

    #[test]
    fn token_refresh_for_same_user_skips_profile_fetch() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        backend.reply("profiles", Ok(vec![admin_profile("u1")]));
        block_on(vm.fetch_session_and_profile());
        let queries_before = backend.queries.borrow().len();

        block_on(vm.handle_auth_event(
            AuthEvent::TokenRefreshed,
            Some(FakeBackend::session_for("u1")),
        ));

        assert_eq!(backend.queries.borrow().len(), queries_before);
        assert!(store.get_state().auth.profile.is_some());
    }

    #[test]
    fn signed_out_event_clears_profile() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        backend.reply("profiles", Ok(vec![admin_profile("u1")]));
        block_on(vm.fetch_session_and_profile());

        block_on(vm.handle_auth_event(AuthEvent::SignedOut, None));

        let auth = store.get_state().auth;
        assert_eq!(auth.profile, None);
        assert_eq!(auth.session, None);
    }

    #[test]
    fn sign_out_during_profile_lookup_stays_signed_out() {
        let (store, backend, vm) = setup();
        *backend.session.borrow_mut() = Ok(Some(FakeBackend::session_for("u1")));
        let profile_reply = backend.defer("profiles");

        let mut lookup = Box::pin(vm.fetch_session_and_profile());
        assert!(poll_once(lookup.as_mut()).is_pending());
        assert!(store.get_state().auth.loading);

        block_on(vm.sign_out()).unwrap();

        profile_reply.send(Ok(vec![admin_profile("u1")])).unwrap();
        assert!(poll_once(lookup.as_mut()).is_ready());

        let auth = store.get_state().auth;
        assert_eq!(auth.session, None);
        assert_eq!(auth.user, None);
        assert_eq!(auth.profile, None);
        assert!(!selectors::is_admin(&auth));
        assert!(auth.hydrated);
        assert!(!auth.loading);
    }
}
