use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use super::query::Order;
use super::record::{id_from_string_or_number, optional_id, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "optional_id")]
    pub province_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Competition {
    /// Sigue abierta o por venir en `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (_, Some(end)) => end >= today,
            (Some(start), None) => start >= today,
            (None, None) => false,
        }
    }
}

impl Record for Competition {
    const TABLE: &'static str = "competitions";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::desc("start_date"))
    }
}
