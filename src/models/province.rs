use serde::{Deserialize, Serialize};
use super::query::Order;
use super::record::{id_from_string_or_number, Record};

/// Provinsi (Jakarta, Jawa Barat, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
}

impl Record for Province {
    const TABLE: &'static str = "provinces";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::asc("name"))
    }
}
