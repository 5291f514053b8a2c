use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that calls a closure on each item and feeds the result to the inner consumer.
///
/// This `struct` is created by [`ConsumerBase::map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Map<C, F> {
    consumer: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(in crate::sink) fn new(consumer: C, f: F) -> Self {
        Self { consumer, f }
    }
}

impl<C, F> ConsumerBase for Map<C, F> {}

impl<C, T, U, F> Consumer<T> for Map<C, F>
where
    C: Consumer<U>,
    F: FnMut(&T) -> U,
{
    type Output = C::Output;
    type Sink = MapSink<C::Sink, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MapSink {
            sink: self.consumer.into_sink(),
            f: self.f,
        }
    }
}

impl<C: Debug, F> Debug for Map<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("consumer", &self.consumer)
            .finish()
    }
}

/// The [`Sink`] of [`Map`].
pub struct MapSink<S, F> {
    sink: S,
    f: F,
}

impl<S, T, U, F> Sink<T> for MapSink<S, F>
where
    S: Sink<U>,
    F: FnMut(&T) -> U,
{
    type Output = S::Output;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.sink.accept_first(&(self.f)(item))
    }

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        self.sink.accept_next(&(self.f)(item))
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.sink.break_hint()
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.sink.finish()
    }
}

impl<S: Debug, F> Debug for MapSink<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSink").field("sink", &self.sink).finish()
    }
}
