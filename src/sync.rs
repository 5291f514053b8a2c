//! Bridges from a pass to other threads.
//!
//! This module corresponds to [`std::sync`].

pub mod mpsc;
