use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::error::FetchError;
use crate::utils::links::public_object_url;
use super::query::Order;
use super::record::{id_from_string_or_number, Record};

/// Imagen de la galería pública (objeto en storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicImage {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub bucket: String,
    pub path: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PublicImage {
    pub fn public_url(&self, base_url: &str) -> Result<String, FetchError> {
        public_object_url(base_url, &self.bucket, &self.path)
    }
}

impl Record for PublicImage {
    const TABLE: &'static str = "public_images";

    fn id(&self) -> &str {
        &self.id
    }

    fn default_order() -> Option<Order> {
        Some(Order::desc("created_at"))
    }
}
