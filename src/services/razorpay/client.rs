use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::RazorpayConfig;
use crate::error::{AppError, AppResult};

const RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";

/// Handle to the Razorpay REST API. Built once at startup and shared for
/// the process lifetime; construction only stores credentials.
#[derive(Clone)]
pub struct RazorpayClient {
    http_client: Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayClient {
    pub fn new(config: &RazorpayConfig) -> Self {
        Self::with_base_url(config, RAZORPAY_API_URL)
    }

    /// Points the client at a different API root. Used by tests to talk to
    /// a local stand-in for the gateway.
    pub fn with_base_url(config: &RazorpayConfig, base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| {
                tracing::error!("Failed to parse Razorpay response: {} - Body: {}", e, body);
                AppError::Internal(format!("Failed to parse gateway response: {}", e))
            })
        } else {
            tracing::error!("Razorpay API error: {} - {}", status, body);

            let message = match status {
                StatusCode::BAD_REQUEST => {
                    if let Ok(error) = serde_json::from_str::<RazorpayError>(&body) {
                        tracing::warn!(
                            "Razorpay rejected the order: {} - {}",
                            error.error.code,
                            error.error.description
                        );
                        error.error.description
                    } else {
                        "Bad request".to_string()
                    }
                }
                StatusCode::UNAUTHORIZED => "Invalid API credentials".to_string(),
                StatusCode::NOT_FOUND => "Resource not found".to_string(),
                StatusCode::TOO_MANY_REQUESTS => "Rate limit exceeded".to_string(),
                _ => format!("API error: {}", status),
            };

            Err(AppError::Gateway { status, message })
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct RazorpayError {
    error: RazorpayErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct RazorpayErrorDetail {
    code: String,
    description: String,
}
