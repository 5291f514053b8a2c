//! Windowed extraction over a sequence whose length is unknown until it ends.
//!
//! Bounds are [`Index`]es, counted either from the start of the sequence or
//! from its end. The end is only known once the sequence is exhausted, so the
//! sinks here buffer just enough items (never more than the window) to decide
//! which ones are in range.
//!
//! This module corresponds to [`std::slice`] and its range indexing.

mod index;
mod window;

pub use index::*;
pub use window::*;
