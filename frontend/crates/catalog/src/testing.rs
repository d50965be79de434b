//! Test Doubles

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use kernel::id::{ProductId, ShopId, UserId};

use crate::domain::entity::{Product, ProductStatus, Shop};
use crate::domain::gateway::{ImageUpload, ProductDraft, ProductGateway, ShopDraft, ShopGateway};
use crate::error::{CatalogError, CatalogResult};

pub(crate) fn shop_fixture() -> Shop {
    Shop {
        id: ShopId::from_raw(9),
        name: "Mug Emporium".to_string(),
        email: "shop@example.com".to_string(),
        description: Some("Handmade ceramics".to_string()),
        logo_url: None,
        owner_id: UserId::from_raw(1),
        created_at: Some(Utc::now()),
    }
}

pub(crate) fn product_fixture() -> Product {
    Product {
        id: ProductId::from_raw(3),
        title: "Ceramic mug".to_string(),
        description: None,
        price: 12.5,
        stock: None,
        status: ProductStatus::Draft,
        shop_id: Some(ShopId::from_raw(9)),
        image_urls: Vec::new(),
        created_at: Some(Utc::now()),
    }
}

#[derive(Default)]
pub(crate) struct FakeShopGateway {
    register_calls: AtomicUsize,
    register: Mutex<Option<CatalogResult<Shop>>>,
}

impl FakeShopGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_register(&self, result: CatalogResult<Shop>) {
        *self.register.lock().unwrap() = Some(result);
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }
}

impl ShopGateway for FakeShopGateway {
    async fn register_shop(&self, _draft: &ShopDraft) -> CatalogResult<Shop> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.register
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(CatalogError::rejected("unscripted gateway call")))
    }

    async fn shop(&self, _id: ShopId) -> CatalogResult<Shop> {
        Err(CatalogError::rejected("unscripted gateway call"))
    }
}

#[derive(Default)]
pub(crate) struct FakeProductGateway {
    create: Mutex<Option<CatalogResult<Product>>>,
}

impl FakeProductGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_create(&self, result: CatalogResult<Product>) {
        *self.create.lock().unwrap() = Some(result);
    }
}

impl ProductGateway for FakeProductGateway {
    async fn create_product(
        &self,
        _draft: &ProductDraft,
        _images: &[ImageUpload],
    ) -> CatalogResult<Product> {
        self.create
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(CatalogError::rejected("unscripted gateway call")))
    }
}
