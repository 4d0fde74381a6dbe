mod language_color;
mod repo_search;
mod repository;

pub use language_color::*;
pub use repo_search::*;
pub use repository::*;
