//! Client-side data context: a cache of the four server collections with
//! explicit, typed mutation commands.
//!
//! The store owns nothing global; the composition root constructs it with a
//! backend and keeps it wherever the UI needs it. Every mutation returns a
//! `Result` so callers see failures instead of a silently unchanged cache.

pub mod http;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Movement, NewMovement, NewProduct, NewRequest, NewSupplier, Product, ProductChanges, Request,
    Supplier,
};

pub use http::HttpBackend;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api {status}: {message}")]
    Api { status: u16, message: String },
}

/// Transport seam for [`InventoryStore`]; [`HttpBackend`] talks to the real
/// server, tests substitute an in-memory fake.
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ClientError>;
    async fn list_movements(&self) -> Result<Vec<Movement>, ClientError>;
    async fn list_requests(&self) -> Result<Vec<Request>, ClientError>;
    async fn create_product(&self, product: &NewProduct) -> Result<Product, ClientError>;
    async fn update_product(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, ClientError>;
    async fn delete_product(&self, id: Uuid) -> Result<(), ClientError>;
    async fn create_supplier(&self, supplier: &NewSupplier) -> Result<Supplier, ClientError>;
    async fn delete_supplier(&self, id: Uuid) -> Result<(), ClientError>;
    async fn create_movement(&self, movement: &NewMovement) -> Result<Movement, ClientError>;
    async fn create_request(&self, request: &NewRequest) -> Result<Request, ClientError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Products,
    Suppliers,
    Movements,
    Requests,
}

#[derive(Debug)]
pub struct RefreshFailure {
    pub collection: Collection,
    pub error: ClientError,
}

/// Outcome of [`InventoryStore::refresh_all`]. There is no atomicity across
/// the four fetches; a failed collection keeps its previous contents and is
/// reported here.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub failures: Vec<RefreshFailure>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct InventoryStore<B> {
    backend: B,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
    movements: Vec<Movement>,
    requests: Vec<Request>,
}

impl<B: InventoryBackend> InventoryStore<B> {
    pub fn new(backend: B) -> Self {
        InventoryStore {
            backend,
            products: Vec::new(),
            suppliers: Vec::new(),
            movements: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Fetch all four collections concurrently. Each successful fetch
    /// replaces its collection wholesale; a failed one is left at its prior
    /// value and named in the report.
    pub async fn refresh_all(&mut self) -> RefreshReport {
        let (products, suppliers, movements, requests) = tokio::join!(
            self.backend.list_products(),
            self.backend.list_suppliers(),
            self.backend.list_movements(),
            self.backend.list_requests(),
        );

        let mut report = RefreshReport::default();
        match products {
            Ok(rows) => self.products = rows,
            Err(error) => report.failures.push(RefreshFailure {
                collection: Collection::Products,
                error,
            }),
        }
        match suppliers {
            Ok(rows) => self.suppliers = rows,
            Err(error) => report.failures.push(RefreshFailure {
                collection: Collection::Suppliers,
                error,
            }),
        }
        match movements {
            Ok(rows) => self.movements = rows,
            Err(error) => report.failures.push(RefreshFailure {
                collection: Collection::Movements,
                error,
            }),
        }
        match requests {
            Ok(rows) => self.requests = rows,
            Err(error) => report.failures.push(RefreshFailure {
                collection: Collection::Requests,
                error,
            }),
        }
        report
    }

    pub async fn add_product(&mut self, product: NewProduct) -> Result<Product, ClientError> {
        let created = self.backend.create_product(&product).await?;
        self.products.push(created.clone());
        Ok(created)
    }

    /// Returns `None` when the server does not know the id (it answers 200
    /// with a null body); the cache is only touched for a real row.
    pub async fn update_product(
        &mut self,
        id: Uuid,
        changes: ProductChanges,
    ) -> Result<Option<Product>, ClientError> {
        let updated = self.backend.update_product(id, &changes).await?;
        if let Some(row) = &updated {
            if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
                *slot = row.clone();
            }
        }
        Ok(updated)
    }

    pub async fn delete_product(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.backend.delete_product(id).await?;
        self.products.retain(|p| p.id != id);
        Ok(())
    }

    pub async fn add_supplier(&mut self, supplier: NewSupplier) -> Result<Supplier, ClientError> {
        let created = self.backend.create_supplier(&supplier).await?;
        self.suppliers.push(created.clone());
        Ok(created)
    }

    pub async fn delete_supplier(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.backend.delete_supplier(id).await?;
        self.suppliers.retain(|s| s.id != id);
        Ok(())
    }

    /// The server appends the ledger entry and adjusts the product's stock
    /// in one transaction; on success the same delta is applied to the
    /// cached product so the UI agrees without a second round trip.
    pub async fn add_movement(&mut self, movement: NewMovement) -> Result<Movement, ClientError> {
        let created = self.backend.create_movement(&movement).await?;
        if let Some(product) = self.products.iter_mut().find(|p| p.id == created.product_id) {
            product.stock += created.movement_type.stock_delta(created.quantity);
        }
        self.movements.insert(0, created.clone());
        Ok(created)
    }

    pub async fn create_request(&mut self, request: NewRequest) -> Result<Request, ClientError> {
        let created = self.backend.create_request(&request).await?;
        self.requests.insert(0, created.clone());
        Ok(created)
    }

    /// Case-insensitive filter over name, SKU and category.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.sku.to_lowercase().contains(&q)
                    || p.category
                        .as_deref()
                        .map(|c| c.to_lowercase().contains(&q))
                        .unwrap_or(false)
            })
            .collect()
    }

    /// Cached movements created within [start, end], for reporting.
    pub fn movements_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&Movement> {
        self.movements
            .iter()
            .filter(|m| m.created_at >= start && m.created_at <= end)
            .collect()
    }

    /// CSV snapshot of the cached products.
    pub fn export_csv(&self) -> String {
        let mut out = String::from("SKU,Name,Category,Stock,Price\n");
        for p in &self.products {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                p.sku,
                p.name,
                p.category.as_deref().unwrap_or(""),
                p.stock,
                p.price
            ));
        }
        out
    }
}
