//! # API Layer
//!
//! A thin facade over the catalog and the filter engine. User interfaces talk
//! to [`CatalogApi`] only: it takes plain Rust values (a [`Criteria`] or any
//! [`Specification`]) and returns a structured [`Selection`]. It never writes
//! to stdout/stderr and never decides exit codes.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::criteria::Criteria;
use crate::filter::{Filter, SpecFilter};
use crate::model::Product;
use crate::spec::Specification;

pub use crate::config::{OutputFormat, SpecFilterConfig};
pub use crate::model::{Color, Size};

/// The outcome of a selection: the matching products, in catalog order, and
/// how many products were examined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    pub scanned: usize,
    pub products: Vec<&'a Product>,
}

impl Selection<'_> {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name()).collect()
    }
}

pub struct CatalogApi<F = SpecFilter> {
    catalog: Catalog,
    filter: F,
}

impl CatalogApi<SpecFilter> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_filter(catalog, SpecFilter)
    }
}

impl<F: Filter<Product>> CatalogApi<F> {
    pub fn with_filter(catalog: Catalog, filter: F) -> Self {
        Self { catalog, filter }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every product in the catalog.
    pub fn list(&self) -> Selection<'_> {
        Selection {
            scanned: self.catalog.len(),
            products: self.catalog.iter().collect(),
        }
    }

    /// Products matching declarative criteria.
    pub fn select(&self, criteria: &Criteria) -> Selection<'_> {
        let spec = criteria.to_specification();
        let selection = self.select_with(&spec);
        tracing::debug!(
            criteria = %criteria,
            matched = selection.len(),
            scanned = selection.scanned,
            "selected products"
        );
        selection
    }

    /// Products matching a caller-built specification.
    pub fn select_with(&self, spec: &dyn Specification<Product>) -> Selection<'_> {
        Selection {
            scanned: self.catalog.len(),
            products: self.filter.filter(self.catalog.products(), spec),
        }
    }
}
