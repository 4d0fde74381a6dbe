//! Repository search decorated with language colors.
//!
//! [`ParallelRepoItemRepository`] fetches a page of the GitHub repository
//! search and the language color document concurrently, and merges them into a
//! [`SearchResult`].

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
