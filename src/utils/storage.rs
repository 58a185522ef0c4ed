use web_sys::{window, Storage};
use serde::{Serialize, de::DeserializeOwned};
use crate::error::FetchError;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn unavailable() -> FetchError {
    FetchError::Storage("localStorage no disponible".to_string())
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), FetchError> {
    let storage = get_local_storage()
        .ok_or_else(unavailable)?;
    let json = serde_json::to_string(value)
        .map_err(|e| FetchError::Storage(format!("error al serializar: {}", e)))?;
    storage.set_item(key, &json)
        .map_err(|_| FetchError::Storage(format!("no se pudo escribir {}", key)))?;
    Ok(())
}

/// Entradas corruptas se tratan como ausentes
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Entrada inválida en localStorage ({}): {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(key: &str) -> Result<(), FetchError> {
    let storage = get_local_storage()
        .ok_or_else(unavailable)?;
    storage.remove_item(key)
        .map_err(|_| FetchError::Storage(format!("no se pudo borrar {}", key)))?;
    Ok(())
}
