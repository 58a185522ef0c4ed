// ============================================================================
// RECORD - Registro tipado de una tabla del backend
// ============================================================================
// Las filas llegan como JSON (`campo -> valor`) y se validan aquí, en la
// frontera: una fila que no encaja invalida el fetch completo.
// ============================================================================

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::error::FetchError;
use super::query::{Order, Query};

pub trait Record: DeserializeOwned + Serialize + Clone + PartialEq + std::fmt::Debug + 'static {
    /// Tabla de origen
    const TABLE: &'static str;

    fn id(&self) -> &str;

    /// Orden que se le pide al backend (no se reordena en cliente)
    fn default_order() -> Option<Order> {
        None
    }

    fn query() -> Query {
        Query::table(Self::TABLE).order(Self::default_order())
    }
}

pub fn decode_row<R: Record>(row: Value) -> Result<R, FetchError> {
    serde_json::from_value(row).map_err(|e| FetchError::InvalidRow {
        table: R::TABLE,
        reason: e.to_string(),
    })
}

/// Convierte filas respetando el orden del backend
pub fn decode_rows<R: Record>(rows: Vec<Value>) -> Result<Vec<R>, FetchError> {
    rows.into_iter().map(decode_row::<R>).collect()
}

/// Acepta ids numéricos (`serial`) o texto (`uuid`)
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Lo mismo para claves foráneas opcionales
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
