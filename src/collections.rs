//! [`Consumer`]s building collections.
//!
//! Every collection is filled with clones of the items. The hash-based ones
//! need the `std` feature.
//!
//! This module corresponds to [`std::collections`].
//!
//! [`Consumer`]: crate::Consumer

#[cfg(feature = "std")]
mod hash_map;
#[cfg(feature = "std")]
mod hash_set;
mod vec;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use hash_map::*;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use hash_set::*;
pub use vec::*;
