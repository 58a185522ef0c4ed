// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP con Supabase (PostgREST + GoTrue)
// ============================================================================
// NO tiene lógica de negocio: pide filas, escribe filas y gestiona la
// sesión persistida en localStorage.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::auth::{RefreshRequest, SignInRequest};
use crate::models::{AuthEvent, Query, Session, User};
use crate::services::backend::{AuthCallback, Backend};
use crate::state::{Subscribers, Subscription};
use crate::utils::links::{encode_query, endpoint_url};
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage};

/// Cliente Supabase - stateless salvo la sesión en storage y los listeners
#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    storage_key: String,
    listeners: Subscribers<(AuthEvent, Option<Session>)>,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, storage_key: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            anon_key: anon_key.to_string(),
            storage_key: storage_key.to_string(),
            listeners: Subscribers::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.supabase_anon_key.is_empty() {
            log::warn!("⚠️ SUPABASE_ANON_KEY vacío: las peticiones serán rechazadas");
        }
        Self::new(&config.supabase_url, &config.supabase_anon_key, &config.session_storage_key)
    }

    fn url(&self, segments: &[&str], query: Option<&str>) -> Result<String, FetchError> {
        let mut url = endpoint_url(&self.base_url, segments.iter().copied())?;
        if let Some(query) = query {
            url.set_query(Some(query));
        }
        Ok(url.to_string())
    }

    fn stored_session(&self) -> Option<Session> {
        load_from_storage::<Session>(&self.storage_key)
    }

    /// Token de la sesión si la hay; si no, la clave anon
    fn bearer(&self) -> String {
        self.stored_session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.anon_key.clone())
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
    }

    fn persist_session(&self, session: &Session) {
        if let Err(e) = save_to_storage(&self.storage_key, session) {
            log::error!("❌ Error guardando sesión: {}", e);
        }
    }

    fn forget_session(&self) {
        if let Err(e) = remove_from_storage(&self.storage_key) {
            log::warn!("⚠️ Error limpiando sesión: {}", e);
        }
    }

    fn emit(&self, event: AuthEvent, session: Option<Session>) {
        log::info!("🔐 Auth event: {:?}", event);
        self.listeners.notify(&(event, session));
    }

    async fn request_token<B: serde::Serialize>(&self, grant_type: &str, body: &B) -> Result<Session, FetchError> {
        let query = encode_query([("grant_type", grant_type)]);
        let url = self.url(&["auth", "v1", "token"], Some(&query))?;

        let response = Request::post(&url)
            .header("apikey", &self.anon_key)
            .json(body)
            .map_err(|e| FetchError::Network(format!("serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<TokenResponse>()
            .await
            .map(TokenResponse::into_session)
            .map_err(|e| FetchError::Network(format!("parse error: {}", e)))
    }
}

#[async_trait(?Send)]
impl Backend for SupabaseClient {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        let url = self.url(&["rest", "v1", query.table], Some(&query.to_query_string()))?;
        log::info!("📋 Consultando {}", query.table);

        let response = self
            .with_headers(Request::get(&url))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| FetchError::InvalidRow {
                table: query.table,
                reason: e.to_string(),
            })
    }

    async fn upsert(&self, table: &str, row: Value) -> Result<(), FetchError> {
        let url = self.url(&["rest", "v1", table], None)?;
        log::info!("📝 Guardando fila en {}", table);

        let response = self
            .with_headers(Request::post(&url))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&row)
            .map_err(|e| FetchError::Network(format!("serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), FetchError> {
        let filter = format!("eq.{}", id);
        let query = encode_query([("id", filter.as_str())]);
        let url = self.url(&["rest", "v1", table], Some(&query))?;
        log::info!("🗑️ Eliminando {} de {}", id, table);

        let response = self
            .with_headers(Request::delete(&url))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn get_session(&self) -> Result<Option<Session>, FetchError> {
        let session = match self.stored_session() {
            Some(session) => session,
            None => return Ok(None),
        };

        if !session.is_expired(chrono::Utc::now().timestamp()) {
            return Ok(Some(session));
        }

        let refresh_token = match session.refresh_token {
            Some(token) => token,
            None => {
                log::info!("⌛ Sesión expirada sin refresh token");
                self.forget_session();
                return Ok(None);
            }
        };

        log::info!("🔄 Refrescando sesión expirada...");
        match self.request_token("refresh_token", &RefreshRequest { refresh_token }).await {
            Ok(fresh) => {
                self.persist_session(&fresh);
                Ok(Some(fresh))
            }
            // Sin red no sabemos si el token sigue valiendo: se conserva
            Err(e @ FetchError::Network(_)) => Err(e),
            Err(e) => {
                log::warn!("⚠️ Refresh rechazado, sesión descartada: {}", e);
                self.forget_session();
                Ok(None)
            }
        }
    }

    async fn get_user(&self) -> Result<Option<User>, FetchError> {
        if self.stored_session().is_none() {
            return Ok(None);
        }

        let url = self.url(&["auth", "v1", "user"], None)?;
        let response = self
            .with_headers(Request::get(&url))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.status() == 401 || response.status() == 403 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<User>()
            .await
            .map(Some)
            .map_err(|e| FetchError::Network(format!("parse error: {}", e)))
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, FetchError> {
        log::info!("🔐 Iniciando sesión: {}", email);
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let session = self.request_token("password", &request).await?;
        self.persist_session(&session);
        self.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), FetchError> {
        let result = match self.stored_session() {
            Some(_) => {
                let url = self.url(&["auth", "v1", "logout"], None)?;
                match self.with_headers(Request::post(&url)).send().await {
                    Ok(response) if response.ok() => Ok(()),
                    Ok(response) => Err(error_from_response(response).await),
                    Err(e) => Err(FetchError::Network(e.to_string())),
                }
            }
            None => Ok(()),
        };

        // La sesión local se descarta aunque el servidor falle
        self.forget_session();
        self.emit(AuthEvent::SignedOut, None);
        log::info!("👋 Logout");
        result
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription {
        self.listeners
            .subscribe(move |payload: &(AuthEvent, Option<Session>)| callback(payload.0, payload.1.clone()))
    }
}

/// Respuesta de `/auth/v1/token`
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self.expires_at.or_else(|| {
            self.expires_in
                .map(|seconds| chrono::Utc::now().timestamp() + seconds)
        });
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Cuerpo de error de PostgREST (`message`) o GoTrue (`msg`, `error_description`)
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .filter(|m| !m.trim().is_empty())
    }
}

async fn error_from_response(response: Response) -> FetchError {
    let status = response.status();
    let status_text = response.status_text();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);

    match message {
        Some(message) => FetchError::Backend(message),
        None => FetchError::Http {
            status,
            message: status_text,
        },
    }
}
