//! # Criteria
//!
//! [`Criteria`] is the declarative form of a product filter, the shape a user
//! interface collects from its inputs. It is compiled into a tree of
//! specifications by [`Criteria::to_specification`]:
//!
//! - Several colors are alternatives: `color in {green, blue}`.
//! - Several sizes are alternatives: `size in {small, large}`.
//! - A name fragment is a case-insensitive substring match.
//! - Attribute clauses are ANDed together, or ORed when `match_any` is set.
//! - `negate` inverts the whole result.
//!
//! Empty criteria match every product; negated empty criteria match none.

use serde::Serialize;
use std::fmt;

use crate::model::{Color, Product, Size};
use crate::spec::{
    AllOf, AnyOf, BoxedSpecification, ColorSpecification, NameSpecification, SizeSpecification,
    SpecificationExt,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    pub name: Option<String>,
    pub match_any: bool,
    pub negate: bool,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        if !self.colors.contains(&color) {
            self.colors.push(color);
        }
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        if !self.sizes.contains(&size) {
            self.sizes.push(size);
        }
        self
    }

    pub fn name(mut self, fragment: impl Into<String>) -> Self {
        self.name = Some(fragment.into());
        self
    }

    pub fn match_any(mut self, match_any: bool) -> Self {
        self.match_any = match_any;
        self
    }

    pub fn negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// True when no attribute clause is set.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.name.is_none()
    }

    /// Compile into a specification tree.
    pub fn to_specification(&self) -> BoxedSpecification<'static, Product> {
        let clauses = self.clauses();

        let combined: BoxedSpecification<'static, Product> = if clauses.is_empty() {
            AllOf::<Product>::new(Vec::new()).boxed()
        } else if self.match_any {
            AnyOf::new(clauses).boxed()
        } else {
            AllOf::new(clauses).boxed()
        };

        if self.negate {
            combined.not().boxed()
        } else {
            combined
        }
    }

    fn clauses(&self) -> Vec<BoxedSpecification<'static, Product>> {
        let mut clauses: Vec<BoxedSpecification<'static, Product>> = Vec::new();

        if !self.colors.is_empty() {
            let colors: Vec<BoxedSpecification<'static, Product>> = self
                .colors
                .iter()
                .map(|&c| ColorSpecification::new(c).boxed())
                .collect();
            clauses.push(AnyOf::new(colors).boxed());
        }

        if !self.sizes.is_empty() {
            let sizes: Vec<BoxedSpecification<'static, Product>> = self
                .sizes
                .iter()
                .map(|&s| SizeSpecification::new(s).boxed())
                .collect();
            clauses.push(AnyOf::new(sizes).boxed());
        }

        if let Some(name) = &self.name {
            clauses.push(NameSpecification::new(name).boxed());
        }

        clauses
    }
}

fn join<I: IntoIterator<Item = String>>(parts: I) -> String {
    parts.into_iter().collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = Vec::new();
        if !self.colors.is_empty() {
            clauses.push(format!(
                "color in {{{}}}",
                join(self.colors.iter().map(|c| c.to_string()))
            ));
        }
        if !self.sizes.is_empty() {
            clauses.push(format!(
                "size in {{{}}}",
                join(self.sizes.iter().map(|s| s.to_string()))
            ));
        }
        if let Some(name) = &self.name {
            clauses.push(format!("name contains \"{}\"", name));
        }

        let body = if clauses.is_empty() {
            "everything".to_string()
        } else {
            let sep = if self.match_any { " or " } else { " and " };
            clauses.join(sep)
        };

        if self.negate {
            write!(f, "not ({})", body)
        } else {
            f.write_str(&body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;

    fn items() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small).unwrap(),
            Product::new("Tree", Color::Green, Size::Large).unwrap(),
            Product::new("House", Color::Blue, Size::Large).unwrap(),
            Product::new("Rose", Color::Red, Size::Small).unwrap(),
        ]
    }

    fn select(criteria: &Criteria) -> Vec<String> {
        let items = items();
        let spec = criteria.to_specification();
        filter(&items, &spec)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = Criteria::new();
        assert!(criteria.is_empty());
        assert_eq!(select(&criteria), vec!["Apple", "Tree", "House", "Rose"]);
    }

    #[test]
    fn negated_empty_criteria_match_nothing() {
        assert!(select(&Criteria::new().negate(true)).is_empty());
    }

    #[test]
    fn single_color() {
        assert_eq!(
            select(&Criteria::new().color(Color::Green)),
            vec!["Apple", "Tree"]
        );
    }

    #[test]
    fn several_colors_are_alternatives() {
        assert_eq!(
            select(&Criteria::new().color(Color::Blue).color(Color::Red)),
            vec!["House", "Rose"]
        );
    }

    #[test]
    fn attributes_are_anded_by_default() {
        assert_eq!(
            select(&Criteria::new().color(Color::Green).size(Size::Large)),
            vec!["Tree"]
        );
    }

    #[test]
    fn match_any_ors_attributes() {
        assert_eq!(
            select(
                &Criteria::new()
                    .color(Color::Blue)
                    .size(Size::Small)
                    .match_any(true)
            ),
            vec!["Apple", "House", "Rose"]
        );
    }

    #[test]
    fn negate_inverts() {
        assert_eq!(
            select(&Criteria::new().color(Color::Green).negate(true)),
            vec!["House", "Rose"]
        );
    }

    #[test]
    fn name_fragment() {
        assert_eq!(select(&Criteria::new().name("o")), vec!["House", "Rose"]);
    }

    #[test]
    fn duplicate_values_are_ignored() {
        let criteria = Criteria::new().color(Color::Green).color(Color::Green);
        assert_eq!(criteria.colors, vec![Color::Green]);
    }

    #[test]
    fn display_describes_criteria() {
        assert_eq!(Criteria::new().to_string(), "everything");
        assert_eq!(
            Criteria::new()
                .color(Color::Green)
                .size(Size::Large)
                .to_string(),
            "color in {green} and size in {large}"
        );
        assert_eq!(
            Criteria::new()
                .color(Color::Red)
                .color(Color::Blue)
                .name("ho")
                .match_any(true)
                .negate(true)
                .to_string(),
            "not (color in {red, blue} or name contains \"ho\")"
        );
    }
}
