use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

use crate::catalog::Product;
use crate::table::query::{QueryState, SortDirection, SortField, SortKey};

/// Filtered and sorted projection of the record store.
///
/// Always freshly allocated; holding one never observes later query changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    rows: Vec<Arc<Product>>,
}

impl FilteredView {
    pub fn rows(&self) -> &[Arc<Product>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derives the view for `query` over `records`.
///
/// Keeps records whose lowercased title contains the search text, then sorts
/// by the selected column. The sort is stable, so ties keep fetch order.
pub fn compute_filtered_view(records: &[Arc<Product>], query: &QueryState) -> FilteredView {
    let needle = query.search_text();
    let mut rows: Vec<Arc<Product>> = records
        .iter()
        .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(needle))
        .cloned()
        .collect();

    if let Some(key) = query.sort {
        sort_rows(&mut rows, key);
    }

    FilteredView { rows }
}

/// Stable in both directions: equal keys keep filter order.
fn sort_rows(rows: &mut [Arc<Product>], key: SortKey) {
    match (key.field, key.direction) {
        (SortField::Price, SortDirection::Ascending) => {
            rows.sort_by(|a, b| price_cmp(a.price, b.price))
        }
        (SortField::Price, SortDirection::Descending) => {
            rows.sort_by(|a, b| price_cmp(b.price, a.price))
        }
        (SortField::Title, SortDirection::Ascending) => {
            rows.sort_by_cached_key(|p| p.title.to_lowercase())
        }
        (SortField::Title, SortDirection::Descending) => {
            rows.sort_by_cached_key(|p| Reverse(p.title.to_lowercase()))
        }
    }
}

/// Numeric order where `-0.0` ties with `0.0`.
fn price_cmp(a: f64, b: f64) -> Ordering {
    let zeroed = |price: f64| if price == 0.0 { 0.0 } else { price };
    zeroed(a).total_cmp(&zeroed(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    fn product(id: i64, title: &str, price: f64) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::Number(id),
            title: title.to_string(),
            price,
            category: None,
            images: Vec::new(),
        })
    }

    fn ids(view: &FilteredView) -> Vec<String> {
        view.rows().iter().map(|p| p.id.to_string()).collect()
    }

    fn query(search: &str, sort: Option<SortKey>) -> QueryState {
        let mut query = QueryState::default();
        query.set_search_text(search);
        query.sort = sort;
        query
    }

    fn sample() -> Vec<Arc<Product>> {
        vec![
            product(1, "Classic Red Shirt", 30.0),
            product(2, "Wireless Mouse", 10.0),
            product(3, "classic blue shirt", 20.0),
            product(4, "Leather Boots", 20.0),
            product(5, "Shirt Box", 10.0),
        ]
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let view = compute_filtered_view(&sample(), &QueryState::default());
        assert_eq!(ids(&view), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let view = compute_filtered_view(&sample(), &query("SHIRT", None));
        assert_eq!(ids(&view), ["1", "3", "5"]);
    }

    #[test]
    fn longer_search_narrows_results() {
        let records = sample();
        let text = "classic red";
        for end in 0..=text.len() {
            let prefix = compute_filtered_view(&records, &query(&text[..end], None));
            let longer = compute_filtered_view(&records, &query(text, None));
            for row in longer.rows() {
                assert!(prefix.rows().contains(row), "prefix '{}'", &text[..end]);
            }
        }
    }

    #[test]
    fn price_sort_both_directions() {
        let records = vec![product(1, "a", 30.0), product(2, "b", 10.0), product(3, "c", 20.0)];
        let asc = SortKey::new(SortField::Price, SortDirection::Ascending);
        let desc = SortKey::new(SortField::Price, SortDirection::Descending);

        let prices = |view: FilteredView| view.rows().iter().map(|p| p.price).collect::<Vec<_>>();
        assert_eq!(prices(compute_filtered_view(&records, &query("", Some(asc)))), [10.0, 20.0, 30.0]);
        assert_eq!(prices(compute_filtered_view(&records, &query("", Some(desc)))), [30.0, 20.0, 10.0]);
    }

    #[test]
    fn price_sort_is_stable_in_both_directions() {
        let records = sample();
        let asc = compute_filtered_view(
            &records,
            &query("", Some(SortKey::new(SortField::Price, SortDirection::Ascending))),
        );
        assert_eq!(ids(&asc), ["2", "5", "3", "4", "1"]);

        let desc = compute_filtered_view(
            &records,
            &query("", Some(SortKey::new(SortField::Price, SortDirection::Descending))),
        );
        assert_eq!(ids(&desc), ["1", "3", "4", "2", "5"]);
    }

    #[test]
    fn negative_zero_price_ties_with_zero() {
        let records: Vec<Arc<Product>> = serde_json::from_str::<Vec<Product>>(
            r#"[{"id": 1, "title": "a", "price": 0},
                {"id": 2, "title": "b", "price": -0},
                {"id": 3, "title": "c", "price": -0.0},
                {"id": 4, "title": "d", "price": 0.0}]"#,
        )
        .unwrap()
        .into_iter()
        .map(Arc::new)
        .collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let view = compute_filtered_view(
                &records,
                &query("", Some(SortKey::new(SortField::Price, direction))),
            );
            assert_eq!(ids(&view), ["1", "2", "3", "4"], "{:?}", direction);
        }
    }

    #[test]
    fn title_sort_folds_case_and_is_stable() {
        let records = vec![
            product(1, "beta", 1.0),
            product(2, "Alpha", 1.0),
            product(3, "BETA", 1.0),
            product(4, "alpha", 1.0),
        ];
        let asc = compute_filtered_view(
            &records,
            &query("", Some(SortKey::new(SortField::Title, SortDirection::Ascending))),
        );
        assert_eq!(ids(&asc), ["2", "4", "1", "3"]);

        let desc = compute_filtered_view(
            &records,
            &query("", Some(SortKey::new(SortField::Title, SortDirection::Descending))),
        );
        assert_eq!(ids(&desc), ["1", "3", "2", "4"]);
    }

    #[test]
    fn sort_applies_after_filter() {
        let view = compute_filtered_view(
            &sample(),
            &query("shirt", Some(SortKey::new(SortField::Price, SortDirection::Ascending))),
        );
        assert_eq!(ids(&view), ["5", "3", "1"]);
    }

    #[test]
    fn empty_inputs_yield_empty_view() {
        assert!(compute_filtered_view(&[], &QueryState::default()).is_empty());
        assert!(compute_filtered_view(&sample(), &query("abc", None)).is_empty());
    }

    #[test]
    fn view_is_independent_of_later_queries() {
        let records = sample();
        let mut q = query("shirt", None);
        let first = compute_filtered_view(&records, &q);
        q.set_search_text("mouse");
        let second = compute_filtered_view(&records, &q);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 1);
    }
}
