//! Headless mode: fetch once, apply the query, write one page as plain text.

use anyhow::Context;
use std::io::Write;
use std::num::NonZeroUsize;

use crate::catalog::{CatalogClient, Product};
use crate::config::Config;
use crate::table::SortKey;
use crate::ui::mvi::Reducer;
use crate::ui::rows::{project_rows, COLUMNS, EMPTY_PLACEHOLDER};
use crate::ui::table::{TableIntent, TableReducer, TableState};

#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub page: i64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            search: None,
            sort: None,
            page: 1,
        }
    }
}

/// Runs the same transitions the interactive table would for these options.
pub fn build_state(
    products: Vec<Product>,
    page_size: NonZeroUsize,
    options: &PrintOptions,
) -> TableState {
    let mut intents = vec![TableIntent::Loaded { products }];
    if let Some(text) = &options.search {
        intents.push(TableIntent::SetSearchText { text: text.clone() });
    }
    if options.sort.is_some() {
        intents.push(TableIntent::SetSort { sort: options.sort });
    }
    intents.push(TableIntent::GoToPage { page: options.page });

    intents
        .into_iter()
        .fold(TableState::with_page_size(page_size), TableReducer::reduce)
}

/// Current page as aligned columns followed by the `Page X of Y` readout.
pub fn render_plain(state: &TableState) -> String {
    let rows = project_rows(state.current_rows());
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 5]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(COLUMNS));
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    if rows.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
    }
    for row in &rows {
        out.push_str(&format_line(row.cells()));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&state.page_info().to_string());
    out.push('\n');
    out
}

pub fn run_print(config: &Config, options: &PrintOptions) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = CatalogClient::new(&config.catalog)?;
    let products = runtime
        .block_on(client.fetch_catalog())
        .map_err(|err| {
            tracing::error!(error = %err, "Catalog fetch failed");
            let summary = err.user_message();
            anyhow::Error::new(err).context(summary)
        })?;

    let state = build_state(products, config.table.initial_page_size(), options);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(render_plain(&state).as_bytes())
        .context("Failed to write table")?;
    Ok(())
}
