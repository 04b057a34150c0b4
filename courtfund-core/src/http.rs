use crate::error::{CourtfundError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A single hosted function reached with query-string dispatch.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    http: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Endpoint {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, query: &[(&str, String)]) -> Result<T> {
        let response = self.http.get(&self.url).query(query).send().await?;
        decode_json(response).await
    }
}

/// Decode a JSON response, turning non-2xx statuses into `Api` errors with the
/// server-supplied message when one is present.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error.or(body.message))
            .unwrap_or_else(|| "unexpected server response".to_string());
        return Err(CourtfundError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

pub(crate) fn build_client(timeout: std::time::Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}
