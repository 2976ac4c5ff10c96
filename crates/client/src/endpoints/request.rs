//! Sending requests and mapping failures to [`ClientError`].
//!
//! Nothing here retries: a failed request is reported once and the user
//! re-triggers the action.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Prefix of the 404 body the backend sends when no cluster matches.
const NO_MATCHING_CLUSTER_PREFIX: &str = "no matching clusters found";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Send a request; non-2xx responses become [`ClientError::ApiError`].
pub async fn send_request(builder: RequestBuilder, endpoint: &str) -> Result<Response> {
    let response = builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            ClientError::from(e)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        debug!(endpoint, status = status.as_u16(), "request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    debug!(endpoint, status = status.as_u16(), "request failed");

    Err(error_from_body(status.as_u16(), url, body))
}

fn error_from_body(status: u16, url: String, body: String) -> ClientError {
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    };

    if status == 404
        && message
            .to_ascii_lowercase()
            .starts_with(NO_MATCHING_CLUSTER_PREFIX)
    {
        return ClientError::NoMatchingCluster(message);
    }

    ClientError::ApiError {
        status,
        url,
        message,
    }
}

/// Read the whole body as text.
pub async fn read_text(response: Response) -> Result<String> {
    Ok(response.text().await?)
}

/// Decode a JSON body; decode failures are [`ClientError::InvalidResponse`].
pub async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("{endpoint}: {e}")))
}
