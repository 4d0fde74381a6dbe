use std::sync::Arc;

use log::debug;
use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    LanguageColorClient, RemoteResult, RepoItemRepository, RepoSearchClient, SearchResult,
};

/// A repository that fetches the language colors and the search page in
/// parallel, then merges them.
pub struct ParallelRepoItemRepository {
    /// The language colors client
    color_client: Arc<dyn LanguageColorClient>,

    /// The repository search client
    search_client: Arc<dyn RepoSearchClient>,

    /// The runtime on which both remote calls are spawned
    io_context: Handle,
}

impl ParallelRepoItemRepository {
    /// Creates a new `ParallelRepoItemRepository` spawning its calls on `io_context`.
    pub fn new(
        color_client: Arc<dyn LanguageColorClient>,
        search_client: Arc<dyn RepoSearchClient>,
        io_context: Handle,
    ) -> Self {
        Self {
            color_client,
            search_client,
            io_context,
        }
    }
}

async fn join_branch<T>(handle: JoinHandle<RemoteResult<T>>) -> RemoteResult<T> {
    handle.await?
}

#[async_trait::async_trait]
impl RepoItemRepository for ParallelRepoItemRepository {
    /// Fails with the first error observed. When both calls fail, which error
    /// is returned depends on completion order.
    async fn search(&self, term: &str, page: u32) -> RemoteResult<SearchResult> {
        let color_client = Arc::clone(&self.color_client);
        let colors_handle = self
            .io_context
            .spawn(async move { color_client.fetch_colors().await });
        let search_client = Arc::clone(&self.search_client);
        let term_owned = term.to_string();
        let search_handle = self
            .io_context
            .spawn(async move { search_client.search_repos(&term_owned, page).await });
        let abort_handles = [colors_handle.abort_handle(), search_handle.abort_handle()];

        match tokio::try_join!(join_branch(colors_handle), join_branch(search_handle)) {
            Ok((colors, response)) => {
                let result = response.into_search_result(&colors);
                debug!(
                    "Search term={term}, page={page}: {} repositories, {} language colors",
                    result.len(),
                    colors.len()
                );
                Ok(result)
            }
            Err(e) => {
                for abort_handle in abort_handles {
                    abort_handle.abort();
                }
                Err(e)
            }
        }
    }
}
