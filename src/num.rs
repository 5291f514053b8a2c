//! Numeric [`Consumer`]s.
//!
//! [`Sum`] and [`Average`] exist for every primitive numeric type, over plain
//! items and over `Option` items (where `None` is skipped). They are all
//! instances of one reducer, [`Accumulate`], which is public so other
//! accumulate-then-finalize reductions can be built the same way.
//!
//! This module corresponds to [`std::num`].
//!
//! [`Consumer`]: crate::Consumer

mod accumulate;
mod average;
mod sum;

pub use accumulate::*;
pub use average::*;
pub use sum::*;
