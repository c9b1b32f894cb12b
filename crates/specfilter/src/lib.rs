//! # Specfilter Architecture
//!
//! Specfilter is a small library for filtering typed records with **composable
//! specifications**. It is open for extension and closed for modification: new
//! filtering criteria are new types implementing [`spec::Specification`], and
//! neither the filter engine nor any existing specification is ever edited to
//! support them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade over a catalog and a filter                       │
//! │  - Takes Criteria or Specifications, returns Selections     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Criteria (criteria.rs)                                     │
//! │  - Declarative filter description → specification tree     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Specifications (spec/) + Filter Engine (filter.rs)         │
//! │  - Leaf predicates, AND/OR/NOT and n-ary combinators        │
//! │  - Stable, non-owning filtering over slices                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. Apart
//! from reading a catalog or config file on request, every operation is a pure
//! function over borrowed data, so specifications and filters can be shared
//! across threads whenever the concrete types are `Sync`.
//!
//! ## Example
//!
//! ```
//! use specfilter::catalog::Catalog;
//! use specfilter::filter::filter;
//! use specfilter::model::{Color, Size};
//! use specfilter::spec::{ColorSpecification, SizeSpecification, SpecificationExt};
//!
//! let catalog = Catalog::demo();
//! let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
//! let names: Vec<&str> = filter(catalog.products(), &spec)
//!     .into_iter()
//!     .map(|p| p.name())
//!     .collect();
//! assert_eq!(names, vec!["Tree"]);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod model;
pub mod spec;
