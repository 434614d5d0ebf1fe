use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::config::DEFAULT_PAGE_SIZE;

/// Sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: one column, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Price => "price",
            SortField::Title => "title",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}:{}", field, direction)
    }
}

/// Parses `field[:direction]`, e.g. `price:desc` or `title`.
impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.split_once(':').unwrap_or((s, "asc"));
        let field = match field.trim().to_ascii_lowercase().as_str() {
            "price" => SortField::Price,
            "title" => SortField::Title,
            other => return Err(format!("unknown sort field '{}' (expected price or title)", other)),
        };
        let direction = match direction.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => SortDirection::Ascending,
            "desc" | "descending" => SortDirection::Descending,
            other => return Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        };
        Ok(Self { field, direction })
    }
}

/// User-controlled table parameters.
///
/// `current_page` is 1-based and only meaningful relative to the filtered view
/// it was last clamped against.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    search_text: String,
    pub sort: Option<SortKey>,
    pub page_size: NonZeroUsize,
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            search_text: String::new(),
            sort: None,
            page_size,
            current_page: 1,
        }
    }

    /// Lowercased search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Stores `text` case-folded.
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_lowercase();
    }
}
