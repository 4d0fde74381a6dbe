use std::collections::HashMap;

use log::{error, warn};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    ArgbColor, LanguageColorClient, LanguageColorMap, RemoteResult, StdResult,
    infrastructure::http_client::{build_http_client, get_json},
};

/// The production document mapping GitHub languages to their colors.
pub const GITHUB_LANGUAGE_COLORS_URL: &str =
    "https://raw.githubusercontent.com/ozh/github-colors/master/colors.json";

const LOG_TARGET: &str = "language_color_client";

#[derive(Deserialize, Debug)]
struct LanguageColorEntry {
    color: Option<String>,
}

/// Fetches language colors from a JSON document served over HTTP.
pub struct HttpLanguageColorClient {
    client: Client,
    url: Url,
}

impl HttpLanguageColorClient {
    /// Creates a new `HttpLanguageColorClient` fetching the document at the given URL.
    pub fn try_new(url: &str) -> StdResult<Self> {
        Ok(Self {
            client: build_http_client()?,
            url: Url::parse(url)?,
        })
    }

    async fn fetch_entries(&self) -> RemoteResult<HashMap<String, LanguageColorEntry>> {
        get_json(self.client.get(self.url.clone())).await
    }

    fn into_color_map(entries: HashMap<String, LanguageColorEntry>) -> LanguageColorMap {
        entries
            .into_iter()
            .filter_map(|(language, entry)| {
                let color = entry.color?;
                match color.parse::<ArgbColor>() {
                    Ok(color) => Some((language, color)),
                    Err(e) => {
                        warn!(target: LOG_TARGET, "Skipping color of {language}: {e}");
                        None
                    }
                }
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl LanguageColorClient for HttpLanguageColorClient {
    async fn fetch_colors(&self) -> RemoteResult<LanguageColorMap> {
        self.fetch_entries()
            .await
            .map(Self::into_color_map)
            .inspect_err(|e| error!(target: LOG_TARGET, "fetch_colors() failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use crate::RemoteErrorKind;

    use super::*;

    #[tokio::test]
    async fn fetch_colors_skips_missing_and_invalid_colors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/colors.json");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "Kotlin": { "color": "#7F52FF", "url": "https://github.com/trending?l=Kotlin" },
                        "Rust": { "color": "#dea584", "url": "https://github.com/trending?l=Rust" },
                        "COBOL": { "color": null, "url": "https://github.com/trending?l=COBOL" },
                        "Broken": { "color": "blue", "url": "https://github.com/trending?l=Broken" }
                    }));
            })
            .await;
        let client = HttpLanguageColorClient::try_new(&server.url("/colors.json")).unwrap();

        let colors = client.fetch_colors().await.unwrap();

        mock.assert_async().await;
        assert_eq!(2, colors.len());
        assert_eq!(
            Some(ArgbColor::from_rgb(0x7F, 0x52, 0xFF)),
            colors.color_of(Some("Kotlin"))
        );
        assert_eq!(
            Some(ArgbColor::from_rgb(0xDE, 0xA5, 0x84)),
            colors.color_of(Some("Rust"))
        );
        assert_eq!(None, colors.color_of(Some("COBOL")));
    }

    #[tokio::test]
    async fn fetch_colors_empty_document() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/colors.json");
                then.status(200).json_body(json!({}));
            })
            .await;
        let client = HttpLanguageColorClient::try_new(&server.url("/colors.json")).unwrap();

        let colors = client.fetch_colors().await.unwrap();

        assert!(colors.is_empty());
    }

    #[tokio::test]
    async fn fetch_colors_fails_on_http_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/colors.json");
                then.status(404);
            })
            .await;
        let client = HttpLanguageColorClient::try_new(&server.url("/colors.json")).unwrap();

        let error = client.fetch_colors().await.expect_err("Expected an error");

        assert_eq!(RemoteErrorKind::HttpStatus, error.kind());
    }

    #[tokio::test]
    async fn fetch_colors_fails_on_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/colors.json");
                then.status(200).body("<html>not json</html>");
            })
            .await;
        let client = HttpLanguageColorClient::try_new(&server.url("/colors.json")).unwrap();

        let error = client.fetch_colors().await.expect_err("Expected an error");

        assert_eq!(RemoteErrorKind::Decode, error.kind());
    }

    #[test]
    fn try_new_rejects_invalid_url() {
        assert!(HttpLanguageColorClient::try_new("not a url").is_err());
    }
}
