use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::print::PrintOptions;
use crate::table::SortKey;

/// Browse a remote product catalog with search, sort and pagination.
#[derive(Debug, Parser)]
#[command(name = "catalog-table", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/catalog-table/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog endpoint returning a JSON array of products
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Rows per page (must be one of the configured page sizes)
    #[arg(long, short = 'n', value_name = "ROWS")]
    pub page_size: Option<usize>,

    /// Print one page to stdout instead of starting the interactive table
    #[arg(long)]
    pub print: bool,

    /// Search text (print mode)
    #[arg(long, short = 's', requires = "print")]
    pub search: Option<String>,

    /// Sort as field[:asc|desc], field is price or title (print mode)
    #[arg(long, value_name = "FIELD[:DIR]", requires = "print")]
    pub sort: Option<SortKey>,

    /// Page to print, clamped to the available pages (print mode)
    #[arg(long, allow_negative_numbers = true, requires = "print")]
    pub page: Option<i64>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    ///
    /// Validation runs again after overrides so `--page-size` and `--url`
    /// obey the same rules as the file.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.catalog.url = url.clone();
        }
        if let Some(size) = self.page_size {
            config.table.page_size = size;
        }
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            search: self.search.clone(),
            sort: self.sort,
            page: self.page.unwrap_or(1),
        }
    }
}
