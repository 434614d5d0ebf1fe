use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::catalog::Product;
use crate::table::{current_slice, page_count, FilteredView, PageInfo, QueryState, RecordStore};
use crate::ui::mvi::UiState;

/// Catalog fetch progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

/// Everything the table view renders.
///
/// `view` is recomputed by [`super::TableReducer`] whenever the store or the
/// query changes; `query.current_page` is always valid for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableState {
    pub load: LoadStatus,
    pub store: RecordStore,
    pub query: QueryState,
    pub view: FilteredView,
}

impl UiState for TableState {}

impl TableState {
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            query: QueryState::with_page_size(page_size),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadStatus::Loading)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.view.len(), self.query.page_size)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.query.current_page,
            page_count: self.page_count(),
        }
    }

    /// Rows on the current page.
    pub fn current_rows(&self) -> &[Arc<Product>] {
        current_slice(self.view.rows(), self.query.current_page, self.query.page_size)
    }
}
