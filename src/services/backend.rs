// ============================================================================
// BACKEND - Contrato con el backend hospedado (datos + auth)
// ============================================================================
// Los slices y viewmodels solo conocen este trait; `SupabaseClient` es la
// implementación real y los tests usan un backend falso.
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use crate::error::FetchError;
use crate::models::{AuthEvent, Query, Session, User};
use crate::state::Subscription;

/// Callback de cambios de auth (inicio/cierre de sesión, refresh de token)
pub type AuthCallback = Box<dyn Fn(AuthEvent, Option<Session>)>;

#[async_trait(?Send)]
pub trait Backend {
    /// Filas de una tabla (en el orden que devuelva el backend)
    async fn select(&self, query: &Query) -> Result<Vec<Value>, FetchError>;

    async fn upsert(&self, table: &str, row: Value) -> Result<(), FetchError>;

    async fn delete(&self, table: &str, id: &str) -> Result<(), FetchError>;

    /// Sesión actual, `None` si no hay
    async fn get_session(&self) -> Result<Option<Session>, FetchError>;

    /// Usuario verificado por el servidor
    async fn get_user(&self) -> Result<Option<User>, FetchError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, FetchError>;

    async fn sign_out(&self) -> Result<(), FetchError>;

    /// Registrar callback; se libera al soltar la `Subscription`
    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription;
}
