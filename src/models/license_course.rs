use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::query::Order;
use super::record::{id_from_string_or_number, Record};

/// Curso de licencia para entrenadores y jueces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseCourse {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub quota: Option<u32>,
    #[serde(default)]
    pub registration_url: Option<String>,
}

impl Record for LicenseCourse {
    const TABLE: &'static str = "license_courses";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::desc("start_date"))
    }
}
