//! Pager configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{PagerError, Result};

/// Items per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for a pager instance.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PagerConfig {
    /// Number of items shown per page. Must be positive.
    #[builder(default = "DEFAULT_PAGE_SIZE")]
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Total number of items being paginated.
    #[builder(default)]
    #[serde(default)]
    pub total_items: usize,

    /// Maximum number of page links before windowing kicks in (0 = unbounded).
    #[builder(default)]
    #[serde(default)]
    pub max_visible: usize,

    /// Page selected when the pager is created. Clamped into range.
    #[builder(default)]
    #[serde(default)]
    pub initial_page: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PagerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == Some(0) {
            return Err("Page size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl PagerConfig {
    /// Create a new pager config builder.
    pub fn builder() -> PagerConfigBuilder {
        PagerConfigBuilder::default()
    }

    /// Create a config for `total_items` split into pages of `page_size`.
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            page_size,
            total_items,
            ..Self::default()
        }
    }

    /// Set the max visible page links.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Set the initially selected page.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    /// Check values that the type system does not rule out.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PagerError::invalid(
                "page_size",
                "page size must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, Path::new("<inline>"))
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PagerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(json: &str, path: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| PagerError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            max_visible: 0,
            initial_page: 0,
        }
    }
}
