use std::fmt;
use std::num::NonZeroUsize;

/// Number of pages for a view; never less than one so an empty table still
/// reads "Page 1 of 1".
pub fn page_count(view_size: usize, page_size: NonZeroUsize) -> usize {
    view_size.div_ceil(page_size.get()).max(1)
}

/// Bounds `requested` into `[1, page_count]`.
pub fn clamp_page(requested: i64, page_count: usize) -> usize {
    let last = i64::try_from(page_count.max(1)).unwrap_or(i64::MAX);
    // `requested.clamp(1, last)` is positive and fits in usize.
    usize::try_from(requested.clamp(1, last)).unwrap_or(1)
}

/// Rows of `view` shown on `current_page` (1-based). Empty when the page lies
/// outside the view.
pub fn current_slice<T>(view: &[T], current_page: usize, page_size: NonZeroUsize) -> &[T] {
    let Some(index) = current_page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size.get());
    if start >= view.len() {
        return &[];
    }
    let end = start.saturating_add(page_size.get()).min(view.len());
    &view[start..end]
}

/// Pagination readout for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub page_count: usize,
}

impl PageInfo {
    pub fn prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.page_count
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.current_page, self.page_count)
    }
}
