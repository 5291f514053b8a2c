//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the traits needed to build and run requests.
//!
//! # Example
//!
//! ```
//! use onepass::prelude::*;
//! ```

pub use crate::request::{OnePass, Request};
pub use crate::sink::{Consumer, ConsumerBase, Sink};
