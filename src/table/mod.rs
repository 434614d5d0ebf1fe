//! Client-side table core: record store, query parameters, and the pure
//! filter → sort → paginate pipeline.
//!
//! ```text
//! RecordStore ──┐
//!               ├──→ compute_filtered_view ──→ FilteredView ──→ current_slice
//! QueryState ───┘                                   │
//!                                                   └──→ page_count / clamp_page
//! ```
//!
//! Nothing here performs I/O or holds interior mutability; state transitions
//! live in [`crate::ui::table`].

mod pagination;
mod pipeline;
mod query;
mod store;

pub use pagination::{clamp_page, current_slice, page_count, PageInfo};
pub use pipeline::{compute_filtered_view, FilteredView};
pub use query::{QueryState, SortDirection, SortField, SortKey};
pub use store::RecordStore;
