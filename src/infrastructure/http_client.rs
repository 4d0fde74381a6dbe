use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::{RemoteResult, StdResult};

/// The user agent sent with every request.
pub const HTTP_USER_AGENT: &str = concat!("github-search/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by the remote clients.
pub(crate) fn build_http_client() -> StdResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(HTTP_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(Client::builder().default_headers(headers).build()?)
}

/// Sends the request and decodes a successful JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(request_builder: RequestBuilder) -> RemoteResult<T> {
    let body = request_builder
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    Ok(serde_json::from_slice(&body)?)
}
