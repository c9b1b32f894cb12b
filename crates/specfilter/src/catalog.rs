//! # Catalog
//!
//! An ordered, owned collection of [`Product`]s: the collection the filter
//! engine reads from. A catalog is either the built-in demo set or loaded from
//! a JSON array of `{"name", "color", "size"}` objects.
//!
//! Loading is read-only. Catalogs are never written back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::model::{Color, Product, Size};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The three products from the classic open-closed walkthrough.
    pub fn demo() -> Self {
        Self::new(vec![
            Product::known("Apple", Color::Green, Size::Small),
            Product::known("Tree", Color::Green, Size::Large),
            Product::known("House", Color::Blue, Size::Large),
        ])
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
