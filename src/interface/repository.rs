use crate::{RemoteResult, SearchResult};

/// A trait for searching repositories decorated with their language color.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepoItemRepository: Sync + Send {
    /// Searches one page of repositories matching the term.
    async fn search(&self, term: &str, page: u32) -> RemoteResult<SearchResult>;
}
