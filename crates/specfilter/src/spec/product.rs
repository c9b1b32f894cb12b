//! Leaf specifications over [`Product`] attributes.

use super::Specification;
use crate::model::{Color, Product, Size};

/// Matches products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    pub color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color() == self.color
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    pub size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size() == self.size
    }
}

/// Matches products whose name contains a fragment, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    // stored lowercased
    needle: String,
}

impl NameSpecification {
    pub fn new(fragment: impl AsRef<str>) -> Self {
        Self {
            needle: fragment.as_ref().to_lowercase(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.needle
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name().to_lowercase().contains(&self.needle)
    }
}
