use crate::{RemoteResult, RepoItemsSearchResponse};

/// A trait for searching repositories on the remote API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepoSearchClient: Sync + Send {
    /// Fetches one page of repositories matching the term.
    async fn search_repos(&self, term: &str, page: u32) -> RemoteResult<RepoItemsSearchResponse>;
}
