//! Remote product catalog: record types, the HTTP client that fetches them,
//! and image reference normalization.

mod client;
mod images;
mod types;

pub use client::{CatalogClient, FetchError};
pub use images::{sanitize_image_url, PLACEHOLDER_IMAGE_URL};
pub use types::{Category, Product, ProductId};
