//! Cascade HTTP client implementation.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use cascade_core::{
    CancellationRequest, Customer, McaAcceptance, MicrosoftTenantAssociation, NewCustomer,
    Subscription, SubscriptionOrder, ONMICROSOFT_SUFFIX,
};
use chrono::NaiveDateTime;

use crate::error::ClientError;

/// Vendor-hosted endpoint used when no base URL is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.cascadeportal.com";

/// Cascade API client.
///
/// Holds the credentials and connection pool; every method issues exactly one
/// request against the configured base URL and fails fast on any error.
/// The client carries no mutable state, so a single instance can be shared
/// freely across tasks.
#[derive(Debug, Clone)]
pub struct CascadeClient {
    client: Client,
    base_url: String,
    debug: bool,
}

impl CascadeClient {
    /// Create a client against the vendor-hosted endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the credentials cannot be
    /// carried as header values or the HTTP client cannot be built.
    pub fn new(username: &str, password: &str) -> Result<Self, ClientError> {
        Self::with_options(username, password, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the credentials cannot be
    /// carried as header values or the HTTP client cannot be built.
    pub fn with_options(
        username: &str,
        password: &str,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        // Cascade authenticates with per-request headers rather than an
        // Authorization scheme; install them once so every call carries them.
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Username",
            HeaderValue::from_str(username).map_err(|_| {
                ClientError::Configuration("username is not a valid header value".to_string())
            })?,
        );
        let mut password_value = HeaderValue::from_str(password).map_err(|_| {
            ClientError::Configuration("password is not a valid header value".to_string())
        })?;
        password_value.set_sensitive(true);
        headers.insert("X-Password", password_value);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|source| {
                ClientError::Configuration(format!("failed to build HTTP client: {source}"))
            })?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            debug: options.debug,
        })
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// List all customers.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, ClientError> {
        self.get_json("/Customers").await
    }

    /// Retrieve a single customer by primary domain.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_customer(&self, primary_domain: &str) -> Result<Customer, ClientError> {
        self.get_json(&format!("/Customers/{primary_domain}")).await
    }

    /// Create a new customer.
    ///
    /// The primary domain and reference must each be unique within Cascade;
    /// reusing either is rejected remotely, never deduplicated here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] before any I/O when the payload
    /// violates the vendor's documented address rules, otherwise fails as the
    /// other calls do.
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<(), ClientError> {
        customer.validate()?;
        self.post_json("/customers", customer).await
    }

    // ========================================================================
    // Microsoft tenants
    // ========================================================================

    /// Retrieve the Microsoft tenant associated with a customer.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_customer_tenant(
        &self,
        primary_domain: &str,
    ) -> Result<MicrosoftTenantAssociation, ClientError> {
        self.get_json(&format!(
            "/customers/{primary_domain}/MicrosoftTenantAssociation"
        ))
        .await
    }

    /// Provision a Microsoft tenant for a customer.
    ///
    /// `tenant_prefix` is the required domain prefix; the client appends the
    /// `onmicrosoft.com` suffix (e.g. `contoso` becomes
    /// `contoso.onmicrosoft.com`).
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error response.
    pub async fn create_tenant(
        &self,
        primary_domain: &str,
        tenant_prefix: &str,
    ) -> Result<(), ClientError> {
        self.post_empty(&format!(
            "/customers/{primary_domain}/MicrosoftTenant/{tenant_prefix}.{ONMICROSOFT_SUFFIX}"
        ))
        .await
    }

    // ========================================================================
    // MCA acceptance
    // ========================================================================

    /// Retrieve the MCA acceptance recorded for a customer.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_customer_mca(
        &self,
        primary_domain: &str,
    ) -> Result<McaAcceptance, ClientError> {
        self.get_json(&format!("/customers/{primary_domain}/McaAcceptance"))
            .await
    }

    /// Accept the MCA for a customer.
    ///
    /// The numeric `country_id` in the acceptance is the vendor's own country
    /// identifier (UK = 26) and is sent exactly as given.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error response.
    pub async fn accept_mca(
        &self,
        primary_domain: &str,
        acceptance: &McaAcceptance,
    ) -> Result<(), ClientError> {
        self.post_json(&format!("/customers/{primary_domain}/McaAcceptance"), acceptance)
            .await
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// List the subscriptions held by a customer.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_customer_subscriptions(
        &self,
        primary_domain: &str,
    ) -> Result<Vec<Subscription>, ClientError> {
        self.get_json(&format!("/customers/{primary_domain}/subscriptions"))
            .await
    }

    /// Retrieve a single subscription by product code.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_customer_subscription(
        &self,
        primary_domain: &str,
        product_code: &str,
    ) -> Result<Subscription, ClientError> {
        self.get_json(&format!(
            "/customers/{primary_domain}/subscriptions/{product_code}"
        ))
        .await
    }

    /// Create subscriptions for a customer under a single order reference.
    ///
    /// The order reference must be unique within Cascade; a reused reference
    /// is rejected remotely.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] before any I/O for an order with
    /// no subscription lines, otherwise fails as the other calls do.
    pub async fn create_subscription(
        &self,
        primary_domain: &str,
        order: &SubscriptionOrder,
    ) -> Result<(), ClientError> {
        order.validate()?;
        self.post_json(&format!("/customers/{primary_domain}/subscriptions"), order)
            .await
    }

    /// Change the quantity on a subscription.
    ///
    /// Some Cascade deployments reject quantity changes on this endpoint;
    /// confirm with Inty support before relying on it.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error response.
    pub async fn update_subscription(
        &self,
        primary_domain: &str,
        product_code: &str,
        new_quantity: u32,
    ) -> Result<(), ClientError> {
        self.post_json(
            &format!("/customers/{primary_domain}/subscriptions/{product_code}"),
            &QuantityChange {
                quantity: new_quantity,
            },
        )
        .await
    }

    /// Upgrade a subscription to a new product code.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error response.
    pub async fn upgrade_subscription(
        &self,
        primary_domain: &str,
        old_product_code: &str,
        new_product_code: &str,
    ) -> Result<(), ClientError> {
        self.post_json(
            &format!("/customers/{primary_domain}/subscriptions/{old_product_code}"),
            &ProductChange {
                product_code: new_product_code,
            },
        )
        .await
    }

    // ========================================================================
    // Cancellation workflow
    // ========================================================================

    /// Retrieve the pending cancellation request for a subscription, if any.
    ///
    /// Returns `Ok(None)` when no cancellation is pending (HTTP 404).
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error or unparseable response.
    pub async fn get_cancellation_request(
        &self,
        primary_domain: &str,
        product_code: &str,
    ) -> Result<Option<CancellationRequest>, ClientError> {
        let path = format!(
            "/customers/{primary_domain}/subscriptions/{product_code}/cancellation-request"
        );
        let (status, body) = self.send(Method::GET, &path, None).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse(status, &body).map(Some)
    }

    /// Request cancellation of a subscription.
    ///
    /// The date crosses the wire as `YYYY-MM-DD HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error response.
    pub async fn submit_cancellation_request(
        &self,
        primary_domain: &str,
        product_code: &str,
        date_requested: NaiveDateTime,
    ) -> Result<(), ClientError> {
        self.post_json(
            &format!(
                "/customers/{primary_domain}/subscriptions/{product_code}/cancellation-request"
            ),
            &CancellationRequest::new(date_requested),
        )
        .await
    }

    /// Abort a pending cancellation request.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, the credentials are rejected,
    /// or Cascade returns an error response.
    pub async fn abort_cancellation_request(
        &self,
        primary_domain: &str,
        product_code: &str,
    ) -> Result<(), ClientError> {
        self.delete(&format!(
            "/customers/{primary_domain}/subscriptions/{product_code}/cancellation-request"
        ))
        .await
    }

    // ========================================================================
    // Transport helpers
    // ========================================================================

    /// Issue one request and return the raw status and body.
    ///
    /// The body is read to a string before parsing so the debug flag can
    /// surface it without affecting control flow.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(StatusCode, String), ClientError> {
        let url = format!("{}{path}", self.base_url);
        if self.debug {
            match &body {
                Some(json) => tracing::debug!(%method, %url, body = %json, "cascade request"),
                None => tracing::debug!(%method, %url, "cascade request"),
            }
        }

        let mut request = self.client.request(method.clone(), &url);
        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if self.debug {
            tracing::debug!(%method, %url, status = status.as_u16(), body = %text, "cascade response");
        }
        Ok((status, text))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let (status, body) = self.send(Method::GET, path, None).await?;
        Self::parse(status, &body)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let payload = serde_json::to_value(body)?;
        let (status, text) = self.send(Method::POST, path, Some(payload)).await?;
        Self::check_status(status, &text)
    }

    async fn post_empty(&self, path: &str) -> Result<(), ClientError> {
        let (status, text) = self.send(Method::POST, path, None).await?;
        Self::check_status(status, &text)
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let (status, text) = self.send(Method::DELETE, path, None).await?;
        Self::check_status(status, &text)
    }

    fn parse<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ClientError> {
        Self::check_status(status, body)?;
        serde_json::from_str(body).map_err(|source| ClientError::InvalidResponse {
            message: source.to_string(),
        })
    }

    fn check_status(status: StatusCode, body: &str) -> Result<(), ClientError> {
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Authentication {
                status: status.as_u16(),
            });
        }
        let message = if body.trim().is_empty() {
            status.to_string()
        } else {
            body.trim().to_string()
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Quantity-change payload for `update_subscription`.
#[derive(Serialize)]
struct QuantityChange {
    #[serde(rename = "Quantity")]
    quantity: u32,
}

/// Product-change payload for `upgrade_subscription`.
#[derive(Serialize)]
struct ProductChange<'a> {
    #[serde(rename = "ProductCode")]
    product_code: &'a str,
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the Cascade deployment (default: the vendor-hosted
    /// endpoint, [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// Surface raw request/response details via `tracing::debug!`
    /// (default: off). Diagnostics only; returned values are unaffected.
    pub debug: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            debug: false,
        }
    }
}

impl ClientOptions {
    /// Create options pointing at a non-default deployment.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the debug flag.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}
