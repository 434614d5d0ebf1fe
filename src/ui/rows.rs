//! Row projection shared by the terminal table and print mode.

use std::sync::Arc;

use crate::catalog::{sanitize_image_url, Product};

pub const COLUMNS: [&str; 5] = ["ID", "Image", "Title", "Price", "Category"];
pub const EMPTY_PLACEHOLDER: &str = "No products found";

/// Display strings for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub image: String,
    pub title: String,
    pub price: String,
    pub category: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            image: sanitize_image_url(&product.images),
            title: product.title.clone(),
            price: format!("${}", product.price),
            category: product.category_name().unwrap_or("N/A").to_string(),
        }
    }

    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.image.as_str(),
            self.title.as_str(),
            self.price.as_str(),
            self.category.as_str(),
        ]
    }
}

pub fn project_rows(products: &[Arc<Product>]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|product| ProductRow::from_product(product))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ProductId, PLACEHOLDER_IMAGE_URL};

    #[test]
    fn projects_all_columns() {
        let product = Product {
            id: ProductId::Number(7),
            title: "Sleek Chair".to_string(),
            price: 45.5,
            category: Some(Category {
                name: "Furniture".to_string(),
            }),
            images: vec!["[\"https://i.imgur.com/chair.jpeg\"]".to_string()],
        };
        let row = ProductRow::from_product(&product);
        assert_eq!(
            row.cells(),
            ["7", "https://i.imgur.com/chair.jpeg", "Sleek Chair", "$45.5", "Furniture"]
        );
    }

    #[test]
    fn missing_category_and_image() {
        let product = Product {
            id: ProductId::Text("x1".to_string()),
            title: "Mystery".to_string(),
            price: 100.0,
            category: None,
            images: vec!["garbage".to_string()],
        };
        let row = ProductRow::from_product(&product);
        assert_eq!(row.price, "$100");
        assert_eq!(row.category, "N/A");
        assert_eq!(row.image, PLACEHOLDER_IMAGE_URL);
    }
}
