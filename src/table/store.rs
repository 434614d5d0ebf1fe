use std::sync::Arc;

use crate::catalog::Product;

/// The full, unfiltered record set for the session.
///
/// Records are shared with derived views through `Arc`; they are never
/// mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Arc<Product>>,
}

impl RecordStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            records: products.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn records(&self) -> &[Arc<Product>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
