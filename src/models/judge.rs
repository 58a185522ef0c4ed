use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::query::Order;
use super::record::{id_from_string_or_number, optional_id, Record};

/// Juez / wasit con licencia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judge {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub license_level: Option<String>,
    #[serde(default, deserialize_with = "optional_id")]
    pub province_id: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub certified_at: Option<NaiveDate>,
}

impl Record for Judge {
    const TABLE: &'static str = "judges";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::asc("full_name"))
    }
}
