//! The contract between the driver and the reductions it runs.
//!
//! A [`Consumer`] describes a reduction. A [`Sink`] is the mutable state the
//! reduction keeps during one pass, built by [`Consumer::into_sink()`].
//!
//! # Unspecified behaviors
//!
//! After any of [`Sink::accept_first()`], [`Sink::accept_next()`] or
//! [`Sink::break_hint()`] have returned [`Break(())`] once, the behavior of
//! subsequent calls to any method other than [`finish()`](Sink::finish) is
//! unspecified. Sinks may panic or even resume accumulating.
//! The driver never does that: it wraps each sink in a fused slot.
//!
//! This looseness lets sinks omit an internal "stopped" flag.
//!
//! # Example
//!
//! A sink that remembers the longest string it has seen:
//!
//! ```
//! use std::ops::ControlFlow;
//! use onepass::{prelude::*, SinkError};
//!
//! struct Longest;
//!
//! #[derive(Default)]
//! struct LongestSink {
//!     longest: Option<String>,
//! }
//!
//! impl Consumer<String> for Longest {
//!     type Output = String;
//!     type Sink = LongestSink;
//!
//!     fn into_sink(self) -> LongestSink {
//!         LongestSink::default()
//!     }
//! }
//!
//! impl Sink<String> for LongestSink {
//!     type Output = String;
//!
//!     fn accept_next(&mut self, item: &String) -> ControlFlow<()> {
//!         if self.longest.as_ref().is_none_or(|longest| longest.len() < item.len()) {
//!             self.longest = Some(item.clone());
//!         }
//!         ControlFlow::Continue(())
//!     }
//!
//!     fn finish(self) -> Result<String, SinkError> {
//!         self.longest.ok_or(SinkError::Empty)
//!     }
//! }
//!
//! let longest = "a quick brown fox"
//!     .split_whitespace()
//!     .map(String::from)
//!     .feed_into(Longest)
//!     .unwrap();
//!
//! assert_eq!(longest, "quick");
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

mod adapters;
mod consumer;
#[allow(clippy::module_inception)]
mod sink;
mod slot;

pub use adapters::*;
pub use consumer::*;
pub use sink::*;
pub(crate) use slot::*;

