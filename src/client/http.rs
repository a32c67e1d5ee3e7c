//! reqwest implementation of the backend seam.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{ClientError, InventoryBackend};
use crate::models::{
    Movement, NewMovement, NewProduct, NewRequest, NewSupplier, Product, ProductChanges, Request,
    Supplier,
};

pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpBackend {
            base_url,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn expect_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json::<T>().await?)
}

async fn expect_ok(resp: Response) -> Result<(), ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(())
}

#[async_trait]
impl InventoryBackend for HttpBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        expect_json(self.http.get(self.url("/api/products")).send().await?).await
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ClientError> {
        expect_json(self.http.get(self.url("/api/suppliers")).send().await?).await
    }

    async fn list_movements(&self) -> Result<Vec<Movement>, ClientError> {
        expect_json(self.http.get(self.url("/api/movements")).send().await?).await
    }

    async fn list_requests(&self) -> Result<Vec<Request>, ClientError> {
        expect_json(self.http.get(self.url("/api/requests")).send().await?).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, ClientError> {
        expect_json(
            self.http
                .post(self.url("/api/products"))
                .json(product)
                .send()
                .await?,
        )
        .await
    }

    async fn update_product(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, ClientError> {
        expect_json(
            self.http
                .put(self.url(&format!("/api/products/{}", id)))
                .json(changes)
                .send()
                .await?,
        )
        .await
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), ClientError> {
        expect_ok(
            self.http
                .delete(self.url(&format!("/api/products/{}", id)))
                .send()
                .await?,
        )
        .await
    }

    async fn create_supplier(&self, supplier: &NewSupplier) -> Result<Supplier, ClientError> {
        expect_json(
            self.http
                .post(self.url("/api/suppliers"))
                .json(supplier)
                .send()
                .await?,
        )
        .await
    }

    async fn delete_supplier(&self, id: Uuid) -> Result<(), ClientError> {
        expect_ok(
            self.http
                .delete(self.url(&format!("/api/suppliers/{}", id)))
                .send()
                .await?,
        )
        .await
    }

    async fn create_movement(&self, movement: &NewMovement) -> Result<Movement, ClientError> {
        expect_json(
            self.http
                .post(self.url("/api/movements"))
                .json(movement)
                .send()
                .await?,
        )
        .await
    }

    async fn create_request(&self, request: &NewRequest) -> Result<Request, ClientError> {
        expect_json(
            self.http
                .post(self.url("/api/requests"))
                .json(request)
                .send()
                .await?,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let b = HttpBackend::new("http://localhost:4000/");
        assert_eq!(b.url("/api/products"), "http://localhost:4000/api/products");
    }
}
