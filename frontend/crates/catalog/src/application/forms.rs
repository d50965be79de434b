//! Seller Forms
//!
//! Shop onboarding and product listing. Same contract as the auth
//! forms: local validation with field-scoped errors, one API call,
//! a `submitting` flag blocking re-entrancy.

use kernel::error::app_error::{AppError, AppResult};

use crate::domain::entity::{Product, Shop};
use crate::domain::gateway::{ImageUpload, ProductDraft, ProductGateway, ShopDraft, ShopGateway};
use crate::error::{CatalogError, CatalogResult};

const SHOP_NAME_MAX: usize = 150;
const SHOP_EMAIL_MAX: usize = 150;
const SHOP_DESCRIPTION_MAX: usize = 255;
const PRODUCT_TITLE_MAX: usize = 180;
const PRODUCT_PRICE_MAX: f64 = 999_999_999_999.0 / 100.0;
const PRODUCT_IMAGES_MAX: usize = 10;

// ============================================================
// Shop onboarding
// ============================================================

#[derive(Default)]
pub struct ShopOnboardingForm {
    pub name: String,
    pub email: String,
    pub description: String,
    pub logo_url: String,
    submitting: bool,
}

impl ShopOnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> AppResult<ShopDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "Shop name is required"));
        }
        if name.chars().count() > SHOP_NAME_MAX {
            return Err(AppError::validation(
                "name",
                format!("Shop name must be at most {SHOP_NAME_MAX} characters"),
            ));
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::validation("email", "Shop email is required"));
        }
        if email.chars().count() > SHOP_EMAIL_MAX {
            return Err(AppError::validation(
                "email",
                format!("Shop email must be at most {SHOP_EMAIL_MAX} characters"),
            ));
        }
        if !email_shaped(&email) {
            return Err(AppError::validation("email", "Invalid email format"));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::validation(
                "description",
                "Description is required",
            ));
        }
        if description.chars().count() > SHOP_DESCRIPTION_MAX {
            return Err(AppError::validation(
                "description",
                format!("Description must be at most {SHOP_DESCRIPTION_MAX} characters"),
            ));
        }

        let logo_url = match self.logo_url.trim() {
            "" => None,
            url if url_shaped(url) => Some(url.to_string()),
            _ => {
                return Err(AppError::validation("logoUrl", "Invalid logo URL"));
            }
        };

        Ok(ShopDraft {
            name: name.to_string(),
            email,
            description: description.to_string(),
            logo_url,
        })
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> CatalogResult<Shop>
    where
        G: ShopGateway + Sync,
    {
        if self.submitting {
            return Err(CatalogError::AlreadySubmitting);
        }
        let draft = self.validate()?;

        self.submitting = true;
        let result = gateway.register_shop(&draft).await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }
}

// ============================================================
// Product listing
// ============================================================

/// Numeric fields are held as raw text until validation, the same way
/// they arrive from an input widget
#[derive(Default)]
pub struct ProductListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub images: Vec<ImageUpload>,
    submitting: bool,
}

impl ProductListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether another image may be attached
    pub fn can_attach_image(&self) -> bool {
        self.images.len() < PRODUCT_IMAGES_MAX
    }

    pub fn validate(&self) -> AppResult<ProductDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("title", "Title is required"));
        }
        if title.chars().count() > PRODUCT_TITLE_MAX {
            return Err(AppError::validation(
                "title",
                format!("Title must be at most {PRODUCT_TITLE_MAX} characters"),
            ));
        }

        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(AppError::validation("price", "Price is required"));
        }
        let price: f64 = price_text
            .parse()
            .map_err(|_| AppError::validation("price", "Price must be a number"))?;
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::validation("price", "Price must be zero or more"));
        }
        if price > PRODUCT_PRICE_MAX {
            return Err(AppError::validation("price", "Price is too large"));
        }

        let stock = match self.stock.trim() {
            "" => None,
            text => Some(
                text.parse::<u32>()
                    .map_err(|_| AppError::validation("stock", "Stock must be a whole number"))?,
            ),
        };

        if self.images.len() > PRODUCT_IMAGES_MAX {
            return Err(AppError::validation(
                "images",
                format!("At most {PRODUCT_IMAGES_MAX} images are allowed"),
            ));
        }

        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        Ok(ProductDraft {
            title: title.to_string(),
            description,
            price,
            stock,
        })
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> CatalogResult<Product>
    where
        G: ProductGateway + Sync,
    {
        if self.submitting {
            return Err(CatalogError::AlreadySubmitting);
        }
        let draft = self.validate()?;

        self.submitting = true;
        let result = gateway.create_product(&draft, &self.images).await;
        self.submitting = false;

        if let Err(err) = &result {
            err.log();
        }
        result
    }
}

fn email_shaped(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

fn url_shaped(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://"))
        && !url.chars().any(char::is_whitespace)
        && url.len() > 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeProductGateway, FakeShopGateway, product_fixture, shop_fixture};

    fn shop_form() -> ShopOnboardingForm {
        ShopOnboardingForm {
            name: "Mug Emporium".to_string(),
            email: "shop@example.com".to_string(),
            description: "Handmade ceramics".to_string(),
            ..ShopOnboardingForm::default()
        }
    }

    fn product_form() -> ProductListingForm {
        ProductListingForm {
            title: "Ceramic mug".to_string(),
            price: "12.50".to_string(),
            ..ProductListingForm::default()
        }
    }

    #[tokio::test]
    async fn test_shop_onboarding_happy_path() {
        let gateway = FakeShopGateway::new();
        gateway.script_register(Ok(shop_fixture()));
        let mut form = shop_form();

        let shop = form.submit(&gateway).await.unwrap();
        assert_eq!(shop.name, "Mug Emporium");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_shop_bounds() {
        let mut form = shop_form();
        form.name = "x".repeat(151);
        assert_eq!(form.validate().unwrap_err().field(), Some("name"));

        let mut form = shop_form();
        form.description = "x".repeat(256);
        assert_eq!(form.validate().unwrap_err().field(), Some("description"));

        let mut form = shop_form();
        form.logo_url = "not a url".to_string();
        assert_eq!(form.validate().unwrap_err().field(), Some("logoUrl"));

        let mut form = shop_form();
        form.logo_url = "https://cdn.example.com/logo.png".to_string();
        assert!(form.validate().unwrap().logo_url.is_some());
    }

    #[tokio::test]
    async fn test_shop_validation_never_networks() {
        let gateway = FakeShopGateway::new();
        let mut form = shop_form();
        form.description.clear();

        let err = form.submit(&gateway).await.unwrap_err();
        assert!(err.is_local());
        assert_eq!(gateway.register_calls(), 0);
    }

    #[tokio::test]
    async fn test_product_price_parsing() {
        let mut form = product_form();
        assert_eq!(form.validate().unwrap().price, 12.5);

        form.price = "-1".to_string();
        assert_eq!(form.validate().unwrap_err().field(), Some("price"));

        form.price = "abc".to_string();
        assert_eq!(form.validate().unwrap_err().field(), Some("price"));

        form.price = "10000000000000".to_string();
        assert_eq!(form.validate().unwrap_err().field(), Some("price"));

        form.price = "0".to_string();
        assert_eq!(form.validate().unwrap().price, 0.0);
    }

    #[tokio::test]
    async fn test_product_optional_fields() {
        let draft = product_form().validate().unwrap();
        assert!(draft.stock.is_none());
        assert!(draft.description.is_none());

        let mut form = product_form();
        form.stock = "5".to_string();
        form.description = "A mug".to_string();
        let draft = form.validate().unwrap();
        assert_eq!(draft.stock, Some(5));
        assert_eq!(draft.description.as_deref(), Some("A mug"));

        form.stock = "-2".to_string();
        assert_eq!(form.validate().unwrap_err().field(), Some("stock"));
    }

    #[tokio::test]
    async fn test_product_image_limit() {
        let mut form = product_form();
        for i in 0..10 {
            form.images.push(ImageUpload {
                file_name: format!("img-{i}.png"),
                content_type: "image/png".to_string(),
                bytes: vec![0],
            });
        }
        assert!(!form.can_attach_image());
        assert!(form.validate().is_ok());

        form.images.push(ImageUpload {
            file_name: "one-too-many.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0],
        });
        assert_eq!(form.validate().unwrap_err().field(), Some("images"));
    }

    #[tokio::test]
    async fn test_product_submission() {
        let gateway = FakeProductGateway::new();
        gateway.script_create(Ok(product_fixture()));
        let mut form = product_form();

        let product = form.submit(&gateway).await.unwrap();
        assert_eq!(product.title, "Ceramic mug");
    }
}
