use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that transforms the final output of the inner consumer.
///
/// This `struct` is created by [`ConsumerBase::map_output()`]. See its documentation for more.
#[derive(Clone)]
pub struct MapOutput<C, F> {
    consumer: C,
    f: F,
}

impl<C, F> MapOutput<C, F> {
    pub(in crate::sink) fn new(consumer: C, f: F) -> Self {
        Self { consumer, f }
    }
}

impl<C, F> ConsumerBase for MapOutput<C, F> {}

impl<C, T, U, F> Consumer<T> for MapOutput<C, F>
where
    C: Consumer<T>,
    F: FnOnce(C::Output) -> U,
{
    type Output = U;
    type Sink = MapOutputSink<C::Sink, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MapOutputSink {
            sink: self.consumer.into_sink(),
            f: self.f,
        }
    }
}

impl<C: Debug, F> Debug for MapOutput<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapOutput")
            .field("consumer", &self.consumer)
            .finish()
    }
}

/// The [`Sink`] of [`MapOutput`].
pub struct MapOutputSink<S, F> {
    sink: S,
    f: F,
}

impl<S, T, U, F> Sink<T> for MapOutputSink<S, F>
where
    S: Sink<T>,
    F: FnOnce(S::Output) -> U,
{
    type Output = U;

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

    /// The closure is not called if the inner sink fails.
    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.sink.finish().map(self.f)
    }
}

impl<S: Debug, F> Debug for MapOutputSink<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapOutputSink")
            .field("sink", &self.sink)
            .finish()
    }
}
