/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

/// Issues a single GET request and decodes the body as JSON
///
/// There is no retry and no timeout: a non-success status is returned as
/// [`AppError::Unexpected`], a body that is not JSON as [`AppError::Deserialization`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request, possibly already carrying query parameters
/// * `query` - Extra query parameters appended to `url`
/// * `api_key` - Appended last as the `apiKey` query parameter
///
/// # Returns
///
/// * `Ok(Value)` - Decoded JSON body of a successful response
/// * `Err(AppError)` - Transport failure, non-success status or undecodable body
pub async fn get_json<Q: Serialize>(
    client: &Client,
    url: &str,
    query: Option<&Q>,
    api_key: &str,
) -> Result<Value, AppError> {
    debug!("GET {}", url);

    let mut request = client.get(url);
    if let Some(query) = query {
        request = request.query(query);
    }
    let response = request.query(&[("apiKey", api_key)]).send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Unexpected(status));
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| AppError::Deserialization(e.to_string()))
}
