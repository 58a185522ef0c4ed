// ============================================================================
// ERRORES - Fallos de la capa de datos
// ============================================================================
// Todo fallo contra el backend termina aquí. El `Display` es el texto corto
// que se guarda en el campo `error` del slice y que ve el usuario.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Mensaje devuelto por el backend (`{ "message": ... }`), tal cual
    #[error("{0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Fila que no encaja con el registro tipado
    #[error("Invalid {table} row: {reason}")]
    InvalidRow { table: &'static str, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FetchError {
    /// Mensaje legible y nunca vacío para el estado del slice
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}
