//! Catalog Entities
//!
//! Read models of the storefront resources. Deserialized straight
//! from the API's camelCase payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use kernel::id::{ProductId, ShopId, UserId};

/// Public view of a user account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Pagination metadata of a listing response
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl PageMeta {
    /// Number of pages implied by `total` and `limit`
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

/// A page of items plus its metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// A seller's shop
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub owner_id: UserId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of a product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Draft,
    Active,
    Archived,
}

/// A product listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: Option<u32>,
    pub status: ProductStatus,
    #[serde(default)]
    pub shop_id: Option<ShopId>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
