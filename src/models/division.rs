use serde::{Deserialize, Serialize};
use super::query::Order;
use super::record::{id_from_string_or_number, Record};

/// División / categoría de competición
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl Record for Division {
    const TABLE: &'static str = "divisions";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::asc("sort_order"))
    }
}
