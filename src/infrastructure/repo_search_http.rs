use log::error;
use reqwest::{Client, Url, header::ACCEPT};

use crate::{
    RemoteResult, RepoItemsSearchResponse, RepoSearchClient, StdResult,
    infrastructure::http_client::{build_http_client, get_json},
};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_API_VERSION: &str = "2022-11-28";

const LOG_TARGET: &str = "repo_search_client";

/// Searches repositories with the GitHub REST API.
pub struct HttpRepoSearchClient {
    client: Client,
    search_url: Url,
    token: Option<String>,
}

impl HttpRepoSearchClient {
    /// Creates a new `HttpRepoSearchClient` for the API rooted at the given URL.
    ///
    /// The token, if any, is sent as a bearer token.
    pub fn try_new(api_url: &str, token: Option<String>) -> StdResult<Self> {
        let mut api_url = Url::parse(api_url)?;
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Ok(Self {
            client: build_http_client()?,
            search_url: api_url.join("search/repositories")?,
            token,
        })
    }

    async fn fetch_page(&self, term: &str, page: u32) -> RemoteResult<RepoItemsSearchResponse> {
        let mut request_builder = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", term)])
            .query(&[("page", page)])
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        if let Some(token) = &self.token {
            request_builder = request_builder.bearer_auth(token);
        }

        get_json(request_builder).await
    }
}

#[async_trait::async_trait]
impl RepoSearchClient for HttpRepoSearchClient {
    async fn search_repos(&self, term: &str, page: u32) -> RemoteResult<RepoItemsSearchResponse> {
        self.fetch_page(term, page).await.inspect_err(|e| {
            error!(target: LOG_TARGET, "search_repos(term={term}, page={page}) failed: {e}")
        })
    }
}
