//! # Domain Model: Products and Their Attributes
//!
//! A [`Product`] is the record type the filter engine works over. It carries a
//! name and two categorical attributes drawn from closed enumerations:
//! [`Color`] and [`Size`].
//!
//! ## Immutability
//!
//! Products are never mutated after construction. Fields are private and only
//! exposed through accessors, so a collection of products can be shared freely
//! between predicates, filters and threads.
//!
//! ## Validation
//!
//! The only runtime check is on the name: a blank name is rejected with
//! [`SpecFilterError::EmptyName`]. Deserialization goes through the same
//! constructor, so a catalog file cannot smuggle in an invalid product.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpecFilterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SpecFilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(SpecFilterError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SpecFilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(SpecFilterError::InvalidSize(s.to_string())),
        }
    }
}

/// A catalog record: a named product with a color and a size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

// Raw shape of a product on the way in, before the name is validated.
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    color: Color,
    size: Size,
}

impl TryFrom<ProductRecord> for Product {
    type Error = SpecFilterError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        Product::new(record.name, record.color, record.size)
    }
}

impl Product {
    /// Create a product. The name is trimmed and must not be empty.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SpecFilterError::EmptyName);
        }

        Ok(Self {
            name: trimmed.to_string(),
            color,
            size,
        })
    }

    // Built-in records whose names are known to be non-blank.
    pub(crate) fn known(name: &'static str, color: Color, size: Size) -> Self {
        debug_assert!(!name.trim().is_empty());
        Self {
            name: name.to_string(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(" BLUE ".parse::<Color>().unwrap(), Color::Blue);
        assert!(matches!(
            "purple".parse::<Color>(),
            Err(SpecFilterError::InvalidColor(c)) if c == "purple"
        ));
    }

    #[test]
    fn size_parses_and_displays() {
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>().unwrap(), size);
        }
        assert!("huge".parse::<Size>().is_err());
    }

    #[test]
    fn product_trims_name() {
        let product = Product::new("  Apple ", Color::Green, Size::Small).unwrap();
        assert_eq!(product.name(), "Apple");
        assert_eq!(product.color(), Color::Green);
        assert_eq!(product.size(), Size::Small);
    }

    #[test]
    fn product_rejects_blank_name() {
        assert!(matches!(
            Product::new("   ", Color::Red, Size::Medium),
            Err(SpecFilterError::EmptyName)
        ));
    }

    #[test]
    fn product_deserializes_through_validation() {
        let product: Product =
            serde_json::from_str(r#"{"name": "Tree", "color": "green", "size": "large"}"#)
                .unwrap();
        assert_eq!(product.to_string(), "Tree (green, large)");

        let blank: std::result::Result<Product, _> =
            serde_json::from_str(r#"{"name": "", "color": "green", "size": "large"}"#);
        assert!(blank.is_err());
    }

    #[test]
    fn product_serializes_lowercase_attributes() {
        let product = Product::new("House", Color::Blue, Size::Large).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "House", "color": "blue", "size": "large"})
        );
    }
}
