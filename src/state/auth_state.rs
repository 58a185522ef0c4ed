// ============================================================================
// AUTH STATE - Sesión, usuario y perfil + flag de hidratación
// ============================================================================

use crate::models::{Profile, Session, User};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub profile: Option<Profile>,
    /// Pasa a true una sola vez, tras la primera comprobación de sesión
    pub hydrated: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub latest_request: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    SessionPending {
        request: u64,
    },
    SessionResolved {
        request: u64,
        session: Option<Session>,
        user: Option<User>,
        profile: Option<Profile>,
        error: Option<String>,
    },
    /// Empujado por la suscripción de eventos de auth.
    /// Invalida cualquier comprobación de sesión anterior a `request`.
    SetAuthState {
        request: u64,
        session: Option<Session>,
        user: Option<User>,
    },
    ClearProfile {
        request: u64,
    },
}

impl AuthState {
    pub fn reduce(&mut self, action: AuthAction) {
        match action {
            AuthAction::SessionPending { request } => {
                self.latest_request = self.latest_request.max(request);
                self.loading = true;
                self.error = None;
            }
            AuthAction::SessionResolved { request, session, user, profile, error } => {
                // La hidratación se libera aunque la respuesta sea vieja
                self.hydrated = true;
                if request < self.latest_request {
                    log::warn!("⚠️ [auth] respuesta de sesión #{} obsoleta, descartada", request);
                    return;
                }
                self.session = session;
                self.user = user;
                self.profile = profile;
                self.error = error;
                self.loading = false;
            }
            AuthAction::SetAuthState { request, session, user } => {
                self.supersede(request);
                let same_user = match (&self.profile, &user) {
                    (Some(profile), Some(user)) => profile.id == user.id,
                    _ => false,
                };
                if !same_user {
                    self.profile = None;
                }
                self.session = session;
                self.user = user;
            }
            AuthAction::ClearProfile { request } => {
                self.supersede(request);
                self.profile = None;
            }
        }
    }

    /// Una escritura directa gana a las comprobaciones en vuelo: su
    /// resolución llegará como obsoleta y se descartará
    fn supersede(&mut self, request: u64) {
        self.latest_request = self.latest_request.max(request);
        self.loading = false;
    }
}
