//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use catalog_table::catalog::{Category, Product, ProductId};
use catalog_table::config::TableConfig;
use catalog_table::ui::app::App;
use catalog_table::ui::mvi::Reducer;
use catalog_table::ui::table::{TableIntent, TableReducer, TableState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::num::NonZeroUsize;

// -- Fixtures -----------------------------------------------------------------

pub fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id: ProductId::Number(id),
        title: title.to_string(),
        price,
        category: Some(Category {
            name: "Misc".to_string(),
        }),
        images: vec![format!("https://img.example/{}.png", id)],
    }
}

/// `count` products titled "Product N" priced N.
pub fn products(count: i64) -> Vec<Product> {
    (1..=count)
        .map(|id| product(id, &format!("Product {}", id), id as f64))
        .collect()
}

/// Catalog JSON in the shape the real endpoint returns.
pub fn catalog_json(count: i64) -> String {
    let items: Vec<String> = (1..=count)
        .map(|id| {
            format!(
                r#"{{"id": {id}, "title": "Product {id}", "slug": "product-{id}", "price": {id},
                   "category": {{"id": 1, "name": "Misc"}}, "images": ["[\"https://img.example/{id}.png\"]"]}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

// -- State helpers ------------------------------------------------------------

pub fn loaded_state(count: i64, size: usize) -> TableState {
    TableReducer::reduce(
        TableState::with_page_size(page_size(size)),
        TableIntent::Loaded {
            products: products(count),
        },
    )
}

pub fn reduce_all(state: TableState, intents: Vec<TableIntent>) -> TableState {
    intents.into_iter().fold(state, TableReducer::reduce)
}

pub fn titles(state: &TableState) -> Vec<String> {
    state
        .current_rows()
        .iter()
        .map(|p| p.title.clone())
        .collect()
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&TableConfig::default())
}

pub fn make_loaded_app(count: i64) -> App {
    let mut app = make_app();
    app.on_catalog_loaded(Ok(products(count)));
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}
