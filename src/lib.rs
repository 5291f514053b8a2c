//! Computes many reductions over a single-use iterator in exactly one pass.
//!
//! If an [`Iterator`] can only be walked once (it is generated, side-effecting,
//! or backed by I/O), asking it two questions is already a problem:
//!
//! ```
//! // Suppose we read lines from a socket...
//! fn socket_stream() -> impl Iterator<Item = i32> {
//!     [3, 1, 4, 1, 5].into_iter()
//! }
//!
//! let mut stream = socket_stream();
//! let count = stream.by_ref().count();
//! // Too late: the stream is gone.
//! let max = stream.max();
//!
//! assert_eq!(count, 5);
//! assert_eq!(max, None);
//! ```
//!
//! The usual escape hatch is a hand-written [`Iterator::fold`] that computes
//! everything at once, which stops being readable after the second question.
//!
//! This crate lets you describe every reduction declaratively, then runs all of
//! them while pulling the iterator exactly once:
//!
//! ```
//! use onepass::{prelude::*, cmp::Max, iter::{Count, First}};
//!
//! let (count, max, first_even) = [3, 1, 4, 1, 5]
//!     .into_iter()
//!     .request(Count::new())
//!     .and(Max::new())
//!     .and(First::matching(|&x: &i32| x % 2 == 0))
//!     .finalize()
//!     .unwrap();
//!
//! assert_eq!((count, max, first_even), (5, 5, 4));
//! ```
//!
//! The pass stops as soon as no reduction wants more items, so a request
//! made only of short-circuiting reductions terminates even on an infinite
//! iterator:
//!
//! ```
//! use onepass::{prelude::*, iter::{Any, Contains, First}};
//!
//! let (first, any_big, has_42) = (0..)
//!     .request(First::new())
//!     .and(Any::matching(|&x: &u64| x > 1_000))
//!     .and(Contains::new(42_u64))
//!     .finalize()
//!     .unwrap();
//!
//! assert_eq!((first, any_big, has_42), (0, true, true));
//! ```
//!
//! # Consumer and Sink
//!
//! Two traits make this work. Roughly:
//!
//! ```
//! # use std::ops::ControlFlow;
//! # use onepass::SinkError;
//! pub trait Sink<T> {
//!     type Output;
//!     fn accept_first(&mut self, item: &T) -> ControlFlow<()>;
//!     fn accept_next(&mut self, item: &T) -> ControlFlow<()>;
//!     fn finish(self) -> Result<Self::Output, SinkError>;
//! }
//!
//! pub trait Consumer<T> {
//!     type Output;
//!     type Sink: Sink<T, Output = Self::Output>;
//!     fn into_sink(self) -> Self::Sink;
//! }
//! ```
//!
//! A [`Consumer`] is an immutable description of one reduction (its predicate,
//! comparer, indices...). A [`Sink`] is the mutable state machine built from it
//! for one run. Every item is lent to every still-active sink by shared reference,
//! so no sink needs ownership of the item to look at it.
//! A sink returns [`Break`](core::ops::ControlFlow::Break) once it wants nothing more.
//!
//! # Failures
//!
//! Some reductions can fail only once the pass is over (`First` of an empty
//! sequence, `ElementAt` past the end...). Those failures are [`SinkError`]s.
//! [`Request::finalize()`] collects the result of every sink in order and, if any
//! failed, returns one [`AggregateError`] carrying the first cause instead of a
//! partially filled tuple.
//!
//! Misuse (for example a decreasing index request in
//! [`ElementsAt`](iter::ElementsAt)) panics as soon as it is detected.
//!
//! # Features
//!
//! - `std` (default): hash-based collections, the [`sync`] bridge and
//!   [`std::error::Error`] integration. Without it the crate is `no_std` + `alloc`.
//! - `itertools`: [`cmp::MinMax`] yielding [`itertools::MinMaxResult`].
//! - `tracing`: debug/trace events from the driver.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod cmp;
pub mod collections;
mod error;
pub mod iter;
pub mod num;
pub mod prelude;
pub mod request;
mod ring;
pub mod sink;
pub mod slice;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod sync;

#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use error::*;
pub use request::{OnePass, Request};
pub use sink::{Consumer, ConsumerBase, Sink};
pub use slice::Index;
