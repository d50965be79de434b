//! Catalog Client Module
//!
//! Authenticated storefront surface beyond auth itself: profile
//! lookups, shop onboarding, and product listing (multipart upload).
//! Same layering as the auth crate: domain types and gateway traits,
//! form use-cases, HTTP implementation.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
pub(crate) mod testing;

pub use application::forms::{ProductListingForm, ShopOnboardingForm};
pub use domain::entity::{PageMeta, Paginated, Product, ProductStatus, Shop, UserProfile};
pub use domain::gateway::{
    ImageUpload, ProductDraft, ProductGateway, ProfileGateway, ShopDraft, ShopGateway, UserQuery,
};
pub use error::{CatalogError, CatalogResult};
pub use infra::api::HttpCatalogGateway;
