// ============================================================================
// RESOURCE VIEWMODEL - fetch / guardar / eliminar para cualquier slice
// ============================================================================
// pending -> fulfilled | rejected. Los fallos se convierten en el `error`
// del slice; nunca se propagan sin capturar.
// ============================================================================

use std::rc::Rc;
use chrono::Utc;
use crate::error::FetchError;
use crate::models::{decode_rows, Record};
use crate::services::Backend;
use crate::state::ResourceAction;
use crate::stores::{ResourceSlice, Store};

#[derive(Clone)]
pub struct ResourceViewModel {
    store: Store,
    backend: Rc<dyn Backend>,
}

impl ResourceViewModel {
    pub fn new(store: Store, backend: Rc<dyn Backend>) -> Self {
        Self { store, backend }
    }

    /// Pide todas las filas del slice y las deja en el store.
    /// El `Result` es informativo: el estado ya refleja el resultado.
    pub async fn fetch_all<T: Record>(&self, slice: ResourceSlice<T>) -> Result<Vec<T>, FetchError> {
        let request = self.store.next_request_id();
        self.store.dispatch((slice.wrap)(ResourceAction::Pending { request }));
        log::info!("📋 [{}] cargando (#{})...", slice.name, request);

        let result = match self.backend.select(&(slice.query)()).await {
            Ok(rows) => decode_rows::<T>(rows),
            Err(e) => Err(e),
        };

        match result {
            Ok(items) => {
                log::info!("✅ [{}] {} registros", slice.name, items.len());
                self.store.dispatch((slice.wrap)(ResourceAction::Fulfilled {
                    request,
                    items: items.clone(),
                    fetched_at: Utc::now(),
                }));
                Ok(items)
            }
            Err(e) => {
                log::error!("❌ [{}] error cargando: {}", slice.name, e);
                self.store.dispatch((slice.wrap)(ResourceAction::Rejected {
                    request,
                    error: e.user_message(),
                }));
                Err(e)
            }
        }
    }

    /// Crea o actualiza un registro y vuelve a cargar el slice
    pub async fn save_record<T: Record>(&self, slice: ResourceSlice<T>, record: &T) -> Result<(), FetchError> {
        let row = serde_json::to_value(record).map_err(|e| FetchError::InvalidRow {
            table: T::TABLE,
            reason: e.to_string(),
        })?;

        if let Err(e) = self.backend.upsert(T::TABLE, row).await {
            log::error!("❌ [{}] error guardando {}: {}", slice.name, record.id(), e);
            return Err(e);
        }

        log::info!("💾 [{}] guardado {}", slice.name, record.id());
        self.fetch_all(slice).await.map(|_| ())
    }

    /// Elimina por id y vuelve a cargar el slice
    pub async fn delete_record<T: Record>(&self, slice: ResourceSlice<T>, id: &str) -> Result<(), FetchError> {
        if let Err(e) = self.backend.delete(T::TABLE, id).await {
            log::error!("❌ [{}] error eliminando {}: {}", slice.name, id, e);
            return Err(e);
        }

        log::info!("🗑️ [{}] eliminado {}", slice.name, id);
        self.fetch_all(slice).await.map(|_| ())
    }
}
