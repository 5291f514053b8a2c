use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that falls back to a value when the inner one finds nothing.
///
/// Only the "nothing found" failures ([`Empty`], [`NoMatch`] and
/// [`IndexOutOfRange`]) are replaced. Any other failure, such as a
/// [`Single`](super::Single) seeing two matches, still fails.
///
/// This `struct` is created by the `or()` and `or_default()` methods of
/// [`First`](super::First), [`Last`](super::Last), [`Single`](super::Single)
/// and [`ElementAt`](super::ElementAt).
///
/// [`Empty`]: SinkError::Empty
/// [`NoMatch`]: SinkError::NoMatch
/// [`IndexOutOfRange`]: SinkError::IndexOutOfRange
#[derive(Debug, Clone)]
pub struct Or<C, O> {
    consumer: C,
    fallback: O,
}

impl<C, O> Or<C, O> {
    pub(super) const fn new(consumer: C, fallback: O) -> Self {
        Self { consumer, fallback }
    }
}

impl<C, O> ConsumerBase for Or<C, O> {}

impl<T, C, O> Consumer<T> for Or<C, O>
where
    C: Consumer<T, Output = O>,
{
    type Output = O;
    type Sink = OrSink<C::Sink, O>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        OrSink {
            sink: self.consumer.into_sink(),
            fallback: self.fallback,
        }
    }
}

/// The [`Sink`] of [`Or`].
#[derive(Debug, Clone)]
pub struct OrSink<S, O> {
    sink: S,
    fallback: O,
}

impl<T, S, O> Sink<T> for OrSink<S, O>
where
    S: Sink<T, Output = O>,
{
    type Output = O;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.sink.accept_first(item)
    }

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        self.sink.accept_next(item)
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.sink.break_hint()
    }

    fn finish(self) -> Result<Self::Output, SinkError> {
        match self.sink.finish() {
            Err(SinkError::Empty | SinkError::NoMatch | SinkError::IndexOutOfRange { .. }) => {
                Ok(self.fallback)
            }
            result => result,
        }
    }
}
