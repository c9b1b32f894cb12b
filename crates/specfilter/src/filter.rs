//! # Filter Engine
//!
//! Applies a [`Specification`] to a slice of records and returns the matching
//! records, in input order. The engine is stateless and never takes ownership:
//! it hands back references into the caller's slice.
//!
//! The engine is closed for modification. Every new way of filtering is a new
//! specification type, never a new method here.

use crate::spec::Specification;

/// Selects the records that satisfy a specification.
pub trait Filter<T> {
    /// Returns the records for which `spec` holds, in their original order.
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

/// The default, stateless filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFilter;

impl<T> Filter<T> for SpecFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        filter(items, spec)
    }
}

/// Stable filter over a slice.
///
/// An empty slice, or a specification that never holds, yields an empty
/// vector.
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Specification<T> + ?Sized,
{
    let matched: Vec<&T> = filter_iter(items, spec).collect();
    tracing::trace!(
        scanned = items.len(),
        matched = matched.len(),
        "applied specification"
    );
    matched
}

/// Lazy form of [`filter`].
pub fn filter_iter<'a, 's, T, S>(items: &'a [T], spec: &'s S) -> impl Iterator<Item = &'a T> + 's
where
    'a: 's,
    S: Specification<T> + ?Sized,
{
    items.iter().filter(move |item| spec.is_satisfied(item))
}
