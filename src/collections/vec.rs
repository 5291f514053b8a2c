use std::{fmt::Debug, ops::ControlFlow};

use alloc::vec::Vec;

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that collects clones of every item into a [`Vec`].
///
/// This consumer corresponds to `Iterator::collect::<Vec<_>>()`.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, collections::ToVec, iter::Count};
///
/// let (count, items) = "a b c"
///     .split(' ')
///     .request(Count::new())
///     .and(ToVec::new())
///     .finalize()
///     .unwrap();
///
/// assert_eq!((count, items), (3, vec!["a", "b", "c"]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVec;

impl ToVec {
    /// Creates a consumer collecting into a [`Vec`].
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl ConsumerBase for ToVec {}

impl<T: Clone> Consumer<T> for ToVec {
    type Output = Vec<T>;
    type Sink = ToVecSink<T>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ToVecSink { items: Vec::new() }
    }
}

/// The [`Sink`] of [`ToVec`].
#[derive(Clone)]
pub struct ToVecSink<T> {
    items: Vec<T>,
}

impl<T: Clone> Sink<T> for ToVecSink<T> {
    type Output = Vec<T>;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        self.items.push(item.clone());
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.items)
    }
}

impl<T: Debug> Debug for ToVecSink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToVecSink")
            .field("items", &self.items)
            .finish()
    }
}
