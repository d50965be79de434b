//! HTTP Catalog Gateway
//!
//! One struct implementing all three gateway traits. Product creation
//! is the only multipart endpoint: text fields plus up to ten image
//! parts named `images`.

use kernel::envelope::ApiEnvelope;
use kernel::error::app_error::{AppError, GENERIC_ERROR_MESSAGE};
use kernel::id::{ShopId, UserId};
use platform::http::ApiClient;
use platform::multipart;
use platform::token::TokenStore;

use crate::domain::entity::{Paginated, Product, Shop, UserProfile};
use crate::domain::gateway::{
    ImageUpload, ProductDraft, ProductGateway, ProfileGateway, ShopDraft, ShopGateway, UserQuery,
};
use crate::error::{CatalogError, CatalogResult};
use crate::infra::dto::ShopRegisterRequest;

pub struct HttpCatalogGateway<S> {
    client: ApiClient<S>,
}

impl<S> HttpCatalogGateway<S>
where
    S: TokenStore + Send + Sync,
{
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }
}

fn ensure_success<T>(envelope: ApiEnvelope<T>) -> CatalogResult<T> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        let message = envelope
            .message_text()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Err(CatalogError::rejected(message))
    }
}

/// Assemble the multipart body for product creation
fn product_parts(draft: &ProductDraft, images: &[ImageUpload]) -> CatalogResult<multipart::Form> {
    let mut form = multipart::Form::new()
        .text("title", draft.title.clone())
        .text("price", draft.price.to_string());

    if let Some(description) = &draft.description {
        form = form.text("description", description.clone());
    }
    if let Some(stock) = draft.stock {
        form = form.text("stock", stock.to_string());
    }

    for image in images {
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|_| {
                AppError::validation(
                    "images",
                    format!("Unsupported image type: {}", image.content_type),
                )
            })?;
        form = form.part("images", part);
    }

    Ok(form)
}

impl<S> ProfileGateway for HttpCatalogGateway<S>
where
    S: TokenStore + Send + Sync,
{
    async fn me(&self) -> CatalogResult<UserProfile> {
        let envelope: ApiEnvelope<UserProfile> = self.client.get("/users/me").await?;
        ensure_success(envelope)
    }

    async fn user(&self, id: UserId) -> CatalogResult<UserProfile> {
        let envelope: ApiEnvelope<UserProfile> = self.client.get(&format!("/users/{id}")).await?;
        ensure_success(envelope)
    }

    async fn users(&self, query: &UserQuery) -> CatalogResult<Paginated<UserProfile>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(page) = query.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(search) = &query.search {
            params.push(("q", search.clone()));
        }

        let envelope: ApiEnvelope<Paginated<UserProfile>> =
            self.client.get_with_query("/users", &params).await?;
        ensure_success(envelope)
    }
}

impl<S> ShopGateway for HttpCatalogGateway<S>
where
    S: TokenStore + Send + Sync,
{
    async fn register_shop(&self, draft: &ShopDraft) -> CatalogResult<Shop> {
        let envelope: ApiEnvelope<Shop> = self
            .client
            .post("/shops/register", &ShopRegisterRequest::from(draft))
            .await?;
        let shop = ensure_success(envelope)?;
        tracing::info!(shop_id = %shop.id, "Shop registered");
        Ok(shop)
    }

    async fn shop(&self, id: ShopId) -> CatalogResult<Shop> {
        let envelope: ApiEnvelope<Shop> = self.client.get(&format!("/shops/{id}")).await?;
        ensure_success(envelope)
    }
}

impl<S> ProductGateway for HttpCatalogGateway<S>
where
    S: TokenStore + Send + Sync,
{
    async fn create_product(
        &self,
        draft: &ProductDraft,
        images: &[ImageUpload],
    ) -> CatalogResult<Product> {
        let form = product_parts(draft, images)?;
        let envelope: ApiEnvelope<Product> = self.client.post_multipart("/products", form).await?;
        let product = ensure_success(envelope)?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Ceramic mug".to_string(),
            description: None,
            price: 12.5,
            stock: Some(3),
        }
    }

    #[test]
    fn test_product_parts_accepts_valid_mime() {
        let images = [ImageUpload {
            file_name: "mug.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }];
        assert!(product_parts(&draft(), &images).is_ok());
    }

    #[test]
    fn test_product_parts_rejects_bad_mime() {
        let images = [ImageUpload {
            file_name: "mug.png".to_string(),
            content_type: "not a mime type".to_string(),
            bytes: vec![1, 2, 3],
        }];
        let err = product_parts(&draft(), &images).unwrap_err();
        assert!(err.is_local());
    }
}
