//! Combinator specifications.
//!
//! Every combinator is itself a [`Specification`], so trees of any depth can be
//! built. A combinator's answer depends only on its children's answers for the
//! same record; children are only ever read.

use super::{BoxedSpecification, Specification};

/// Logical AND of two specifications. `second` is evaluated only when `first`
/// is satisfied, so cheap checks should go first.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> And<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Logical OR of two specifications. `second` is evaluated only when `first`
/// is not satisfied.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Or<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

/// Logical negation.
#[derive(Debug, Clone, Copy)]
pub struct Not<S> {
    pub inner: S,
}

impl<S> Not<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Satisfied when every child is. An empty list is vacuously satisfied.
pub struct AllOf<'a, T: ?Sized> {
    specs: Vec<BoxedSpecification<'a, T>>,
}

impl<'a, T: ?Sized> AllOf<'a, T> {
    pub fn new(specs: Vec<BoxedSpecification<'a, T>>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Specification<T> for AllOf<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

/// Satisfied when at least one child is. An empty list is never satisfied.
pub struct AnyOf<'a, T: ?Sized> {
    specs: Vec<BoxedSpecification<'a, T>>,
}

impl<'a, T: ?Sized> AnyOf<'a, T> {
    pub fn new(specs: Vec<BoxedSpecification<'a, T>>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Specification<T> for AnyOf<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }
}

/// k-of-n: satisfied when at least `threshold` children are.
///
/// Evaluation stops once the threshold is reached, or once the remaining
/// children can no longer reach it. A threshold of zero is always satisfied;
/// a threshold above the number of children never is.
pub struct AtLeast<'a, T: ?Sized> {
    threshold: usize,
    specs: Vec<BoxedSpecification<'a, T>>,
}

impl<'a, T: ?Sized> AtLeast<'a, T> {
    pub fn new(threshold: usize, specs: Vec<BoxedSpecification<'a, T>>) -> Self {
        Self { threshold, specs }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl<T: ?Sized> Specification<T> for AtLeast<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        let total = self.specs.len();
        let mut hits = 0;

        for (evaluated, spec) in self.specs.iter().enumerate() {
            if hits >= self.threshold {
                return true;
            }
            if hits + (total - evaluated) < self.threshold {
                return false;
            }
            if spec.is_satisfied(item) {
                hits += 1;
            }
        }

        hits >= self.threshold
    }
}
