use std::{fmt::Debug, ops::ControlFlow};

use alloc::vec::Vec;

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{DefaultEq, Equivalence};

/// A consumer that records the position of every item equal to a value.
/// Its [`Output`](Consumer::Output) is a [`Vec`] of positions, in increasing order.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::IndicesOf};
///
/// let text = "abracadabra";
/// assert_eq!(text.chars().feed_into(IndicesOf::new('a')), Ok(vec![0, 3, 5, 7, 10]));
/// ```
#[derive(Debug, Clone)]
pub struct IndicesOf<V, E = DefaultEq> {
    value: V,
    eq: E,
}

impl<V> IndicesOf<V> {
    /// Creates a consumer looking for the items equal to `value`.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            eq: DefaultEq,
        }
    }
}

impl<V, E> IndicesOf<V, E> {
    /// Creates a consumer looking for the items that `eq` deems equal to `value`.
    ///
    /// `eq` is called with the item first and `value` second.
    #[inline]
    pub const fn by(value: V, eq: E) -> Self {
        Self { value, eq }
    }
}

impl<V, E> ConsumerBase for IndicesOf<V, E> {}

impl<T, V, E> Consumer<T> for IndicesOf<V, E>
where
    E: Equivalence<T, V>,
{
    type Output = Vec<usize>;
    type Sink = IndicesOfSink<V, E>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        IndicesOfSink {
            value: self.value,
            eq: self.eq,
            position: 0,
            indices: Vec::new(),
        }
    }
}

/// The [`Sink`] of [`IndicesOf`].
#[derive(Clone)]
pub struct IndicesOfSink<V, E> {
    value: V,
    eq: E,
    position: usize,
    indices: Vec<usize>,
}

impl<T, V, E> Sink<T> for IndicesOfSink<V, E>
where
    E: Equivalence<T, V>,
{
    type Output = Vec<usize>;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.eq.eq(item, &self.value) {
            self.indices.push(self.position);
        }
        self.position += 1;

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.indices)
    }
}

impl<V: Debug, E> Debug for IndicesOfSink<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicesOfSink")
            .field("value", &self.value)
            .field("indices", &self.indices)
            .finish()
    }
}
