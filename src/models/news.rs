use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::query::Order;
use super::record::{id_from_string_or_number, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for NewsArticle {
    const TABLE: &'static str = "news";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::desc("published_at"))
    }
}
