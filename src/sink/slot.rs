use std::ops::ControlFlow;

use crate::{SinkError, sink::Sink};

/// A sink as held by the driver: fused, and aware of whether it has seen an item yet.
///
/// Once the sink returns [`Break(())`](ControlFlow::Break), no further item
/// reaches it and every accept call keeps returning `Break(())`.
#[derive(Debug, Clone)]
#[doc(hidden)]
pub struct Slot<S> {
    sink: S,
    state: ControlFlow<()>,
}

impl<S> Slot<S> {
    /// Wraps a freshly built sink, asking it once whether it wants anything at all.
    #[inline]
    pub(crate) fn new<T>(sink: S) -> Self
    where
        S: Sink<T>,
    {
        Self {
            state: sink.break_hint(),
            sink,
        }
    }

    #[inline]
    pub(crate) fn state(&self) -> ControlFlow<()> {
        self.state
    }

    #[inline]
    fn accept_impl(&mut self, f: impl FnOnce(&mut S) -> ControlFlow<()>) -> ControlFlow<()> {
        self.state?;

        self.state = f(&mut self.sink);
        self.state
    }

    #[inline]
    pub(crate) fn accept_first<T>(&mut self, item: &T) -> ControlFlow<()>
    where
        S: Sink<T>,
    {
        self.accept_impl(|sink| sink.accept_first(item))
    }

    #[inline]
    pub(crate) fn accept_next<T>(&mut self, item: &T) -> ControlFlow<()>
    where
        S: Sink<T>,
    {
        self.accept_impl(|sink| sink.accept_next(item))
    }

    #[inline]
    pub(crate) fn finish<T>(self) -> Result<<S as Sink<T>>::Output, SinkError>
    where
        S: Sink<T>,
    {
        self.sink.finish()
    }
}
