//! Catalog Gateway Traits
//!
//! One trait per resource, matching how the forms and views consume
//! them. HTTP implementations live in `infra`.

use kernel::id::{ShopId, UserId};

use crate::domain::entity::{Paginated, Product, Shop, UserProfile};
use crate::error::CatalogResult;

/// Validated payload for shop onboarding
#[derive(Debug)]
pub struct ShopDraft {
    pub name: String,
    pub email: String,
    pub description: String,
    pub logo_url: Option<String>,
}

/// Validated payload for a new product listing
#[derive(Debug)]
pub struct ProductDraft {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<u32>,
}

/// An image attached to a product listing
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Pagination and search parameters of the user listing
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

#[trait_variant::make(ProfileGateway: Send)]
pub trait LocalProfileGateway {
    /// The signed-in user's own profile
    async fn me(&self) -> CatalogResult<UserProfile>;

    /// Look up another user by id
    async fn user(&self, id: UserId) -> CatalogResult<UserProfile>;

    /// Paginated user listing with optional search
    async fn users(&self, query: &UserQuery) -> CatalogResult<Paginated<UserProfile>>;
}

#[trait_variant::make(ShopGateway: Send)]
pub trait LocalShopGateway {
    /// Register a shop for the signed-in user, making them a seller
    async fn register_shop(&self, draft: &ShopDraft) -> CatalogResult<Shop>;

    /// Look up a shop by id
    async fn shop(&self, id: ShopId) -> CatalogResult<Shop>;
}

#[trait_variant::make(ProductGateway: Send)]
pub trait LocalProductGateway {
    /// Create a product listing with its image attachments
    async fn create_product(
        &self,
        draft: &ProductDraft,
        images: &[ImageUpload],
    ) -> CatalogResult<Product>;
}
