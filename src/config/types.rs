use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Page size used when the configured one is unusable.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the product list comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint returning a JSON array of products.
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Table presentation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Initial rows per page. Must be one of `page_sizes`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Sizes offered by the page-size selector, in display order.
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_catalog_url() -> String {
    "https://api.escuelajs.co/api/v1/products".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE.get()
}

fn default_page_sizes() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_sizes: default_page_sizes(),
        }
    }
}

impl TableConfig {
    /// Initial page size; zero (rejected by validation) maps to the default.
    pub fn initial_page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Allowed sizes with zeros dropped.
    pub fn allowed_page_sizes(&self) -> Vec<NonZeroUsize> {
        let sizes: Vec<NonZeroUsize> = self
            .page_sizes
            .iter()
            .copied()
            .filter_map(NonZeroUsize::new)
            .collect();
        if sizes.is_empty() {
            vec![self.initial_page_size()]
        } else {
            sizes
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("catalog-table")
                .join("catalog-table.log"),
        }
    }
}
