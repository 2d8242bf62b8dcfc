use serde::Serialize;
use std::fmt;

/// A `namespace/name` pair. The namespace is empty for unqualified names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// English indefinite article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    A,
    An,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
