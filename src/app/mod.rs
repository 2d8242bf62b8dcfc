//! Command execution for the `name-strings` binary.
//!
//! Each subcommand renders its result as a single line, either plain text or
//! JSON depending on the resolved [`ToolConfig`].

use crate::config::{Command, ToolConfig};
use crate::domain::ports::ArticleRule;
use crate::utils::error::{NameError, Result};
use crate::{
    get_article_for_noun, join_qualified_name, shorten_string, split_qualified_name,
    try_split_qualified_name, EnglishArticles, QualifiedName,
};
use serde_json::json;

/// Runs one subcommand and returns what should be printed to stdout.
pub fn run(command: &Command, config: &ToolConfig) -> Result<String> {
    let output = match command {
        Command::Split { qualified, .. } => {
            let qn = if config.strict {
                try_split_qualified_name(qualified)?
            } else {
                let (namespace, name) = split_qualified_name(qualified);
                QualifiedName::new(namespace, name)
            };
            tracing::debug!("Split '{}' (strict: {})", qualified, config.strict);

            if config.is_json() {
                serde_json::to_string(&qn)?
            } else {
                format!("{}\t{}", qn.namespace, qn.name)
            }
        }
        Command::Join { namespace, name } => {
            let joined = join_qualified_name(namespace, name);
            if config.is_json() {
                json!({ "qualified": joined }).to_string()
            } else {
                joined
            }
        }
        Command::Shorten { text, .. } => {
            let max = config.max_length.ok_or_else(|| NameError::ConfigError {
                message: "no maximum length: pass --max or set max_length in the config file"
                    .to_string(),
            })?;
            let short = shorten_string(text, max);
            let truncated = short.len() < text.len();
            if truncated {
                tracing::debug!("Shortened {} bytes to {}", text.len(), short.len());
            }

            if config.is_json() {
                json!({ "text": short, "truncated": truncated }).to_string()
            } else {
                short.to_string()
            }
        }
        Command::Article { noun, .. } => {
            let padded = get_article_for_noun(noun, &config.padding);
            if config.is_json() {
                json!({
                    "noun": noun,
                    "article": EnglishArticles.article_for(noun),
                    "padded": padded,
                })
                .to_string()
            } else {
                padded
            }
        }
    };

    Ok(output)
}
