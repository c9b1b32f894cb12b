//! # Specifications
//!
//! A [`Specification`] answers one yes/no question about a single record. It is
//! the unit of extension for filtering: new criteria are new types that
//! implement the trait, and neither the filter engine nor any existing
//! specification has to change to accommodate them.
//!
//! ## Building Blocks
//!
//! | Kind | Types | Description |
//! |------|-------|-------------|
//! | Leaf | [`ColorSpecification`], [`SizeSpecification`], [`NameSpecification`] | Test one product attribute |
//! | Adapter | [`FnSpecification`] via [`from_fn`] | Wrap a closure |
//! | Binary | [`And`], [`Or`] | Short-circuiting logic over two children |
//! | Unary | [`Not`] | Negation |
//! | N-ary | [`AllOf`], [`AnyOf`], [`AtLeast`] | Logic over a list of boxed children |
//!
//! ## Ownership of Children
//!
//! Combinators own their children by value. Because `&S`, `Box<S>` and `Arc<S>`
//! are specifications whenever `S` is, a caller that wants to keep its leaf
//! predicates around simply passes references:
//!
//! ```
//! use specfilter::model::{Color, Size};
//! use specfilter::spec::{And, ColorSpecification, SizeSpecification, Specification};
//! # use specfilter::model::Product;
//!
//! let green = ColorSpecification::new(Color::Green);
//! let large = SizeSpecification::new(Size::Large);
//! let green_and_large = And::new(&green, &large);
//!
//! let tree = Product::new("Tree", Color::Green, Size::Large).unwrap();
//! assert!(green_and_large.is_satisfied(&tree));
//! ```
//!
//! The borrow checker then guarantees the children outlive the combinator.
//!
//! ## Composition Methods
//!
//! [`SpecificationExt`] is implemented for every specification and provides
//! `.and()`, `.or()`, `.not()` and `.boxed()` for fluent composition.

mod combinators;
mod product;

use std::sync::Arc;

pub use combinators::{AllOf, And, AnyOf, AtLeast, Not, Or};
pub use product::{ColorSpecification, NameSpecification, SizeSpecification};

/// A boxed, type-erased specification.
pub type BoxedSpecification<'a, T> = Box<dyn Specification<T> + 'a>;

/// A yes/no test over a single record.
///
/// Implementations must be pure: the same record always yields the same
/// answer, and evaluation has no side effects.
pub trait Specification<T: ?Sized> {
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Fluent composition for any specification.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Satisfied when both `self` and `other` are; `other` is only consulted
    /// when `self` holds.
    fn and<S: Specification<T>>(self, other: S) -> And<Self, S> {
        And::new(self, other)
    }

    /// Satisfied when either `self` or `other` is; `other` is only consulted
    /// when `self` fails.
    fn or<S: Specification<T>>(self, other: S) -> Or<Self, S> {
        Or::new(self, other)
    }

    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    fn boxed<'a>(self) -> BoxedSpecification<'a, T>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

/// A specification backed by a closure.
#[derive(Clone, Copy)]
pub struct FnSpecification<F>(F);

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for FnSpecification<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

/// Turn a closure into a [`Specification`].
pub fn from_fn<T: ?Sized, F: Fn(&T) -> bool>(f: F) -> FnSpecification<F> {
    FnSpecification(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Product, Size};

    fn apple() -> Product {
        Product::new("Apple", Color::Green, Size::Small).unwrap()
    }

    #[test]
    fn references_and_pointers_are_specifications() {
        let green = ColorSpecification::new(Color::Green);
        let by_ref: &dyn Specification<Product> = &green;
        let boxed: BoxedSpecification<'_, Product> = Box::new(green);
        let shared = Arc::new(green);

        assert!(by_ref.is_satisfied(&apple()));
        assert!(boxed.is_satisfied(&apple()));
        assert!(shared.is_satisfied(&apple()));
    }

    #[test]
    fn from_fn_wraps_closures() {
        let short_name = from_fn(|p: &Product| p.name().len() <= 5);
        assert!(short_name.is_satisfied(&apple()));

        let long = Product::new("Greenhouse", Color::Green, Size::Large).unwrap();
        assert!(!short_name.is_satisfied(&long));
    }

    #[test]
    fn fluent_composition_builds_nested_trees() {
        let spec = ColorSpecification::new(Color::Green)
            .and(SizeSpecification::new(Size::Large))
            .or(NameSpecification::new("apple"))
            .not();

        let tree = Product::new("Tree", Color::Green, Size::Large).unwrap();
        let house = Product::new("House", Color::Blue, Size::Large).unwrap();

        assert!(!spec.is_satisfied(&tree));
        assert!(!spec.is_satisfied(&apple()));
        assert!(spec.is_satisfied(&house));
    }

    #[test]
    fn boxed_specs_can_be_stored_together() {
        let specs: Vec<BoxedSpecification<'_, Product>> = vec![
            ColorSpecification::new(Color::Green).boxed(),
            SizeSpecification::new(Size::Small).boxed(),
            from_fn(|p: &Product| p.name().starts_with('A')).boxed(),
        ];
        assert!(specs.iter().all(|s| s.is_satisfied(&apple())));
    }
}
