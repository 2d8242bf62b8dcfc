use crate::utils::error::{NameError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const VALID_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Filler placed around the chosen article.
    pub padding: String,
    /// Default bound for `shorten` when no `--max` is given.
    pub max_length: Option<usize>,
    /// Output format: `text` or `json`.
    pub format: String,
    /// Reject malformed qualified names instead of splitting them loosely.
    pub strict: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            padding: " ".to_string(),
            max_length: None,
            format: "text".to_string(),
            strict: false,
        }
    }
}

impl ToolConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NameError::IoError)?;
        tracing::debug!("Read config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NameError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PADDING})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NameError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_length) = self.max_length {
            validation::validate_positive_number("max_length", max_length, 1)?;
        }
        validation::validate_one_of("format", &self.format, &VALID_FORMATS)?;
        Ok(())
    }
}
