mod http_client;
mod language_color_http;
mod repo_search_http;
mod repository_parallel;

pub use http_client::HTTP_USER_AGENT;
pub use language_color_http::*;
pub use repo_search_http::*;
pub use repository_parallel::*;
