use crate::catalog::{FetchError, Product};
use crate::config::TableConfig;
use crate::table::{PageInfo, SortKey};
use crate::ui::mvi::Reducer;
use crate::ui::table::{TableIntent, TableReducer, TableState};
use std::num::NonZeroUsize;

/// Where typed characters go.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Table,
    Search,
}

/// Terminal failure shown as a popup until dismissed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub summary: String,
    pub details: String,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller owning the table state. Each control maps to one entry point.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Table state (MVI pattern).
    table: TableState,
    page_sizes: Vec<NonZeroUsize>,
    /// Raw search box contents; the query keeps the case-folded copy.
    search_input: String,
    notification: Option<Notification>,
    spinner: usize,
}

impl App {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Table,
            table: TableState::with_page_size(config.initial_page_size()),
            page_sizes: config.allowed_page_sizes(),
            search_input: String::new(),
            notification: None,
            spinner: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner
    }

    pub fn on_tick(&mut self) {
        if self.table.is_loading() {
            self.spinner = self.spinner.wrapping_add(1);
        }
    }

    pub fn dispatch_table(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, table, TableReducer, intent);
    }

    /// Applies the result of the one-shot catalog fetch.
    pub fn on_catalog_loaded(&mut self, result: Result<Vec<Product>, FetchError>) {
        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "Records loaded into table");
                self.dispatch_table(TableIntent::Loaded { products });
            }
            Err(err) => {
                tracing::error!(error = %err, "Catalog fetch failed");
                self.notification = Some(Notification {
                    summary: err.user_message().to_string(),
                    details: err.to_string(),
                });
                self.dispatch_table(TableIntent::LoadFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    // -- Search ---------------------------------------------------------------

    pub fn begin_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn end_search(&mut self) {
        self.focus = Focus::Table;
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_input = text.to_string();
        self.dispatch_table(TableIntent::SetSearchText {
            text: self.search_input.clone(),
        });
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut text = std::mem::take(&mut self.search_input);
        text.push(ch);
        self.set_search_text(&text);
    }

    pub fn pop_search_char(&mut self) {
        let mut text = std::mem::take(&mut self.search_input);
        text.pop();
        self.set_search_text(&text);
    }

    // -- Sort / page size / navigation --------------------------------------

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.dispatch_table(TableIntent::SetSort { sort });
    }

    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.dispatch_table(TableIntent::SetPageSize { size });
    }

    /// Steps through the allowed page sizes, stopping at either end.
    pub fn cycle_page_size(&mut self, step: isize) {
        let current = self.table.query.page_size;
        let index = self
            .page_sizes
            .iter()
            .position(|size| *size == current)
            .unwrap_or(0);
        let last = self.page_sizes.len().saturating_sub(1);
        let next = index.saturating_add_signed(step).min(last);
        if let Some(size) = self.page_sizes.get(next).copied() {
            if size != current {
                self.set_page_size(size);
            }
        }
    }

    /// Moves `delta` pages. Returns false when the move was rejected.
    pub fn change_page(&mut self, delta: i64) -> bool {
        let before = self.table.query.current_page;
        self.dispatch_table(TableIntent::ChangePage { delta });
        self.table.query.current_page != before
    }

    pub fn page_info(&self) -> PageInfo {
        self.table.page_info()
    }
}
