#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ToolConfig;

pub use crate::core::article::{article_with_rule, get_article_for_noun, EnglishArticles};
pub use crate::core::qualified::{
    clean_path, join_qualified_name, split_qualified_name, try_split_qualified_name,
};
pub use crate::core::truncate::{shorten_bytes, shorten_string};
pub use domain::model::{Article, QualifiedName};
pub use domain::ports::ArticleRule;
pub use utils::error::{NameError, Result};
