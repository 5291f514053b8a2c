use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{DefaultEq, Equivalence};

/// A consumer that tells whether the sequence is equal, item by item, to another one.
/// Its [`Output`](Consumer::Output) is [`bool`].
///
/// The other sequence is walked in lockstep: one of its items is pulled per
/// item of the source, starting with the first one. The first mismatch, or
/// the other sequence running out first, settles the answer and stops the
/// pulling on both sides. If the source runs out first, the other sequence is
/// polled once more to make sure it is over too.
///
/// The other sequence is owned by the sink and dropped with it, or as soon as
/// the answer is settled.
///
/// This consumer corresponds to [`Iterator::eq()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::SequenceEqual};
///
/// assert_eq!((1..4).feed_into(SequenceEqual::new([1, 2, 3])), Ok(true));
/// assert_eq!((1..4).feed_into(SequenceEqual::new([1, 2])), Ok(false));
/// assert_eq!((1..4).feed_into(SequenceEqual::new(1..5)), Ok(false));
///
/// let same_words = ["Hello", "World"].feed_into(SequenceEqual::by(
///     "hello world".split(' '),
///     |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
/// ));
/// assert_eq!(same_words, Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct SequenceEqual<J, E = DefaultEq> {
    other: J,
    eq: E,
}

impl<J> SequenceEqual<J>
where
    J: IntoIterator,
{
    /// Creates a consumer comparing the source with `other` using [`PartialEq`].
    #[inline]
    pub const fn new(other: J) -> Self {
        Self { other, eq: DefaultEq }
    }
}

impl<J, E> SequenceEqual<J, E>
where
    J: IntoIterator,
{
    /// Creates a consumer comparing the source with `other` using `eq`.
    ///
    /// `eq` is called with the item of the source first.
    #[inline]
    pub const fn by(other: J, eq: E) -> Self {
        Self { other, eq }
    }
}

impl<J, E> ConsumerBase for SequenceEqual<J, E> {}

impl<T, J, E> Consumer<T> for SequenceEqual<J, E>
where
    J: IntoIterator,
    E: Equivalence<T, J::Item>,
{
    type Output = bool;
    type Sink = SequenceEqualSink<J, J::IntoIter, E>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        SequenceEqualSink {
            state: State::Pending(self.other),
            eq: self.eq,
        }
    }
}

/// The [`Sink`] of [`SequenceEqual`].
#[derive(Clone)]
pub struct SequenceEqualSink<J, I, E> {
    state: State<J, I>,
    eq: E,
}

#[derive(Clone)]
enum State<J, I> {
    // No item seen yet.
    Pending(J),
    Comparing(I),
    Unequal,
}

impl<T, J, E> Sink<T> for SequenceEqualSink<J, J::IntoIter, E>
where
    J: IntoIterator,
    E: Equivalence<T, J::Item>,
{
    type Output = bool;

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if matches!(self.state, State::Pending(_))
            && let State::Pending(other) = std::mem::replace(&mut self.state, State::Unequal)
        {
            self.state = State::Comparing(other.into_iter());
        }

        let State::Comparing(ref mut other) = self.state else {
            return ControlFlow::Break(());
        };

        if other
            .next()
            .is_some_and(|other_item| self.eq.eq(item, &other_item))
        {
            ControlFlow::Continue(())
        } else {
            // Drops the other sequence.
            self.state = State::Unequal;
            ControlFlow::Break(())
        }
    }

    fn finish(self) -> Result<Self::Output, SinkError> {
        let equal = match self.state {
            State::Pending(other) => other.into_iter().next().is_none(),
            State::Comparing(mut other) => other.next().is_none(),
            State::Unequal => false,
        };

        Ok(equal)
    }
}

impl<J, I, E> Debug for SequenceEqualSink<J, I, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Pending(_) => "Pending",
            State::Comparing(_) => "Comparing",
            State::Unequal => "Unequal",
        };

        f.debug_struct("SequenceEqualSink")
            .field("state", &state)
            .finish()
    }
}
