use crate::config::Config;
use crate::models::{cart::Cart, error::AppError, product::Product};
use serde::{Deserialize, Serialize};

// API CONFIGURATION
/// Configuration for the store backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the best-effort seed endpoint.
    pub fn seed_url(&self) -> String {
        format!("{}/seed", self.base_url)
    }

    /// URL of the product catalogue endpoint.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// URL of the add-to-cart endpoint.
    pub fn cart_add_url(&self) -> String {
        format!("{}/cart/add", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| Config::API_URL.to_string()),
        }
    }
}

// REQUEST / RESPONSE TYPES
/// Body for `POST /cart/add`. Quantity is always 1: the storefront adds
/// one pair per click.
#[derive(Debug, Serialize)]
struct AddToCartRequest<'a> {
    product_id: &'a str,
    quantity: u32,
    size: f64,
}

impl<'a> AddToCartRequest<'a> {
    fn new(product_id: &'a str, size: f64) -> Self {
        Self {
            product_id,
            quantity: 1,
            size,
        }
    }
}

#[derive(Deserialize, Debug)]
struct CartResponse {
    cart: Cart,
}

// STORE CLIENT
/// HTTP client for the sneaker store backend.
pub struct StoreClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl StoreClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fires the seed call. A fresh backend uses it to load demo
    /// inventory; the response, status and body alike, is discarded.
    pub async fn seed(&self) {
        let _ = self.http.post(self.config.seed_url()).send().await;
    }

    /// Fetches the product catalogue.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, AppError> {
        let response = self
            .http
            .get(self.config.products_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Adds one pair of the given product, in the given US size, to the
    /// cart. Returns the replacement cart snapshot.
    pub async fn add_to_cart(&self, product_id: &str, size: f64) -> Result<Cart, AppError> {
        let response = self
            .http
            .post(self.config.cart_add_url())
            .json(&AddToCartRequest::new(product_id, size))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let parsed: CartResponse = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        Ok(parsed.cart)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code. Every non-2xx status
    /// lands on the same failure path; the range only shapes the message.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Seeds the backend using default configuration. Best-effort: every
/// failure, including client construction, is ignored.
pub async fn seed_backend() {
    if let Ok(client) = StoreClient::new() {
        client.seed().await;
    }
}

/// Fetches the product catalogue using default configuration.
pub async fn fetch_products() -> Result<Vec<Product>, AppError> {
    StoreClient::new()?.fetch_products().await
}

/// Adds one pair to the cart using default configuration.
pub async fn add_to_cart(product_id: &str, size: f64) -> Result<Cart, AppError> {
    StoreClient::new()?.add_to_cart(product_id, size).await
}
