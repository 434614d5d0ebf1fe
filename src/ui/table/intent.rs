use std::num::NonZeroUsize;

use crate::catalog::Product;
use crate::table::SortKey;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TableIntent {
    /// Catalog fetch succeeded. Replaces the record store.
    Loaded { products: Vec<Product> },
    /// Catalog fetch failed. The store stays empty for the session.
    LoadFailed { message: String },
    /// Search box changed. Resets to page 1.
    SetSearchText { text: String },
    /// Sort trigger. Keeps the current page.
    SetSort { sort: Option<SortKey> },
    /// Page-size selector changed. Resets to page 1.
    SetPageSize { size: NonZeroUsize },
    /// Previous/next navigation. Ignored when the target page does not exist.
    ChangePage { delta: i64 },
    /// Jump to a page, clamped into the valid range.
    GoToPage { page: i64 },
}

impl Intent for TableIntent {}
