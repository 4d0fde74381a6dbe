use crate::{LanguageColorMap, RemoteResult};

/// A trait for fetching the display colors of programming languages.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageColorClient: Sync + Send {
    /// Fetches the mapping from language name to color.
    async fn fetch_colors(&self) -> RemoteResult<LanguageColorMap>;
}
