//! Consumers mirroring the searching and folding methods of [`Iterator`].
//!
//! Most of them come in two flavors: `new()` looks at every item, while
//! `matching()` only looks at the items satisfying a predicate.
//! Those that find one item ([`First`], [`Last`], [`Single`], [`ElementAt`])
//! fail when there is none, unless given a fallback with `or()` or `or_default()`.
//!
//! This module corresponds to [`std::iter`].

mod all;
mod any;
mod contains;
mod count;
mod element_at;
mod elements_at;
mod first;
mod fold;
mod indices_of;
mod last;
mod or;
mod predicate;
mod reduce;
mod sequence_equal;
mod single;

pub use all::*;
pub use any::*;
pub use contains::*;
pub use count::*;
pub use element_at::*;
pub use elements_at::*;
pub use first::*;
pub use fold::*;
pub use indices_of::*;
pub use last::*;
pub use or::*;
pub use predicate::{Always, DefaultEq};
pub(crate) use predicate::{Equivalence, Predicate};
pub use reduce::*;
pub use sequence_equal::*;
pub use single::*;
