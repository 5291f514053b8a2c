use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that only feeds items satisfying a predicate to the inner consumer.
///
/// This `struct` is created by [`ConsumerBase::filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<C, F> {
    consumer: C,
    pred: F,
}

impl<C, F> Filter<C, F> {
    pub(in crate::sink) fn new(consumer: C, pred: F) -> Self {
        Self { consumer, pred }
    }
}

impl<C, F> ConsumerBase for Filter<C, F> {}

impl<C, T, F> Consumer<T> for Filter<C, F>
where
    C: Consumer<T>,
    F: FnMut(&T) -> bool,
{
    type Output = C::Output;
    type Sink = FilterSink<C::Sink, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        FilterSink {
            sink: self.consumer.into_sink(),
            pred: self.pred,
            started: false,
        }
    }
}

impl<C: Debug, F> Debug for Filter<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("consumer", &self.consumer)
            .finish()
    }
}

/// The [`Sink`] of [`Filter`].
pub struct FilterSink<S, F> {
    sink: S,
    pred: F,
    // Whether the inner sink has been given its first item.
    started: bool,
}

impl<S, T, F> Sink<T> for FilterSink<S, F>
where
    S: Sink<T>,
    F: FnMut(&T) -> bool,
{
    type Output = S::Output;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if !(self.pred)(item) {
            ControlFlow::Continue(())
        } else if self.started {
            self.sink.accept_next(item)
        } else {
            self.started = true;
            self.sink.accept_first(item)
        }
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

impl<S: Debug, F> Debug for FilterSink<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSink")
            .field("sink", &self.sink)
            .field("started", &self.started)
            .finish()
    }
}
