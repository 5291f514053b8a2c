use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{DefaultEq, Equivalence};

/// A consumer that tells whether the sequence contains a value.
/// Its [`Output`](Consumer::Output) is [`bool`].
///
/// It stops as soon as the value is found.
///
/// This consumer corresponds to [`slice::contains()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::Contains};
///
/// assert_eq!((0..).feed_into(Contains::new(42)), Ok(true));
///
/// let words = ["Apple", "banana"];
/// let has_apple = words.feed_into(Contains::by("apple", |word: &&str, value: &&str| {
///     word.eq_ignore_ascii_case(value)
/// }));
/// assert_eq!(has_apple, Ok(true));
/// ```
///
/// [`slice::contains()`]: https://doc.rust-lang.org/std/primitive.slice.html#method.contains
#[derive(Debug, Clone)]
pub struct Contains<V, E = DefaultEq> {
    value: V,
    eq: E,
}

impl<V> Contains<V> {
    /// Creates a consumer looking for an item equal to `value`.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            eq: DefaultEq,
        }
    }
}

impl<V, E> Contains<V, E> {
    /// Creates a consumer looking for an item that `eq` deems equal to `value`.
    ///
    /// `eq` is called with the item first and `value` second.
    #[inline]
    pub const fn by(value: V, eq: E) -> Self {
        Self { value, eq }
    }
}

impl<V, E> ConsumerBase for Contains<V, E> {}

impl<T, V, E> Consumer<T> for Contains<V, E>
where
    E: Equivalence<T, V>,
{
    type Output = bool;
    type Sink = ContainsSink<V, E>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ContainsSink {
            value: self.value,
            eq: self.eq,
            found: false,
        }
    }
}

/// The [`Sink`] of [`Contains`].
#[derive(Clone)]
pub struct ContainsSink<V, E> {
    value: V,
    eq: E,
    found: bool,
}

impl<T, V, E> Sink<T> for ContainsSink<V, E>
where
    E: Equivalence<T, V>,
{
    type Output = bool;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.eq.eq(item, &self.value) {
            self.found = true;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.found)
    }
}

impl<V: Debug, E> Debug for ContainsSink<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainsSink")
            .field("value", &self.value)
            .field("found", &self.found)
            .finish()
    }
}
