use serde::{Deserialize, Serialize};
use super::record::{id_from_string_or_number, Record};

/// Usuario de auth (solo lo que usa el cliente)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Sesión tal como la devuelve `/auth/v1/token`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Segundos desde epoch
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    pub fn is_expired(&self, now_epoch_seconds: i64) -> bool {
        matches!(self.expires_at, Some(at) if at <= now_epoch_seconds)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[serde(other)]
    Member,
}

/// Fila de `profiles` (id = id del usuario)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Profile {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl Record for Profile {
    const TABLE: &'static str = "profiles";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Eventos que empuja el proveedor de auth
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RefreshRequest {
    pub refresh_token: String,
}
