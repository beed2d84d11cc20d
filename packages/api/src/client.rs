//! # HTTP client for the identity service and the REST backend
//!
//! One [`ServiceClient`] is shared by every server function. It is a lazy,
//! process-wide singleton behind a [`tokio::sync::OnceCell`]: the first call to
//! [`service_client`] reads [`ServiceConfig::from_env`] and builds the `reqwest` client
//! with the configured timeout.
//!
//! | Method | Upstream call |
//! |--------|---------------|
//! | [`current_session`](ServiceClient::current_session) | `GET {identity}/auth/me` with the bearer token |
//! | [`sign_in`](ServiceClient::sign_in) | `POST {identity}/auth/login`, returns the token from the envelope |
//! | [`list`](ServiceClient::list) | `GET {backend}/<resource>`, flattens the envelope's `data` into rows |
//!
//! A `401` from upstream becomes [`ServiceError::Unauthenticated`] and a `403` becomes
//! [`ServiceError::Forbidden`].

use access::SessionInfo;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::models::{rows_from_value, ApiEnvelope, IdentityMe, Resource, ResourceRow};

static CLIENT: OnceCell<ServiceClient> = OnceCell::const_new();

/// Get or initialize the shared service client.
pub async fn service_client() -> Result<&'static ServiceClient, ServiceError> {
    CLIENT
        .get_or_try_init(|| async {
            let config = ServiceConfig::from_env()?;
            tracing::info!(
                identity = %config.identity_url,
                backend = %config.backend_url,
                "Service client configured"
            );
            ServiceClient::new(config)
        })
        .await
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetch the profile and permission list behind `token`.
    pub async fn current_session(&self, token: &str) -> Result<SessionInfo, ServiceError> {
        let response = self
            .http
            .get(self.config.identity_endpoint("auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        let me: IdentityMe = check_status(response)?.json().await?;
        Ok(me.into_session(&self.config.super_admin_role))
    }

    /// Exchange credentials for a session token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, ServiceError> {
        let response = self
            .http
            .post(self.config.identity_endpoint("auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        read_login(response).await
    }

    /// List the records of a backend collection.
    pub async fn list(
        &self,
        resource: Resource,
        token: &str,
    ) -> Result<Vec<ResourceRow>, ServiceError> {
        let response = self
            .http
            .get(self.config.backend_endpoint(resource.slug()))
            .bearer_auth(token)
            .send()
            .await?;

        let envelope: ApiEnvelope<serde_json::Value> = check_status(response)?.json().await?;
        Ok(rows_from_value(envelope.into_result()?))
    }
}

fn check_status(response: Response) -> Result<Response, ServiceError> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ServiceError::Unauthenticated),
        StatusCode::FORBIDDEN => Err(ServiceError::Forbidden),
        status if status.is_success() => Ok(response),
        status => Err(ServiceError::Status(status.as_u16())),
    }
}

async fn read_login(response: Response) -> Result<String, ServiceError> {
    // A rejected login still carries an envelope with a message.
    let response = match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => response,
        _ => check_status(response)?,
    };
    let envelope: ApiEnvelope<LoginData> = response.json().await?;
    envelope.into_result().map(|data| data.token)
}
