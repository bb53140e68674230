use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use signup_core::{Activities, Activity};
use signup_http::models::{ErrorResponse, MessageResponse, UnregisterRequest};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub async fn list_activities(&self) -> ApiResult<Activities> {
        let response = self.client.get(self.url(&["activities"])).send().await?;
        parse(response).await
    }

    pub async fn get_activity(&self, activity: &str) -> ApiResult<Activity> {
        let response = self
            .client
            .get(self.url(&["activities", activity]))
            .send()
            .await?;
        parse(response).await
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        let response = self
            .client
            .post(self.url(&["activities", activity, "signup"]))
            .query(&[("email", email)])
            .send()
            .await?;
        parse(response).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        let response = self
            .client
            .post(self.url(&["activities", activity, "unregister"]))
            .json(&UnregisterRequest {
                email: email.to_string(),
            })
            .send()
            .await?;
        parse(response).await
    }

    /// Append percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&text)
        .map(|e| e.detail)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text
            }
        });
    tracing::debug!("API returned {}: {}", status, detail);
    Err(ApiError::Api {
        status: status.as_u16(),
        detail,
    })
}
