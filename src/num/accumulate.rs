use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

// The shapes the built-in numeric consumers instantiate their sinks with.
pub(super) type Step<A, T> = fn(&mut A, &T) -> bool;
pub(super) type Finish<A, O> = fn(A, usize) -> Result<O, SinkError>;

/// A consumer that accumulates items, counts the ones that were taken into
/// account, then computes its output from both.
///
/// - `step(&mut accum, &item)` folds one item in and returns whether it counted.
///   Returning `false` is how items are skipped (e.g. `None`s).
/// - `finish(accum, count)` computes the [`Output`](Consumer::Output), and may fail.
///
/// It never stops the pass early.
///
/// # Examples
///
/// The mean length of the non-empty words:
///
/// ```
/// use onepass::{prelude::*, SinkError, num::Accumulate};
///
/// let mean_len = Accumulate::new(
///     0_usize,
///     |total: &mut usize, word: &&str| {
///         *total += word.len();
///         !word.is_empty()
///     },
///     |total: usize, count: usize| match count {
///         0 => Err(SinkError::Empty),
///         count => Ok(total as f64 / count as f64),
///     },
/// );
///
/// assert_eq!(["ab", "", "abcd"].feed_into(mean_len.clone()), Ok(3.0));
/// assert_eq!([""].feed_into(mean_len), Err(SinkError::Empty));
/// ```
#[derive(Clone)]
pub struct Accumulate<A, S, F> {
    init: A,
    step: S,
    finish: F,
}

impl<A, S, F> Accumulate<A, S, F> {
    /// Creates a consumer starting from `init`.
    #[inline]
    pub const fn new(init: A, step: S, finish: F) -> Self {
        Self { init, step, finish }
    }
}

impl<A, S, F> ConsumerBase for Accumulate<A, S, F> {}

impl<T, A, S, F, O> Consumer<T> for Accumulate<A, S, F>
where
    S: FnMut(&mut A, &T) -> bool,
    F: FnOnce(A, usize) -> Result<O, SinkError>,
{
    type Output = O;
    type Sink = AccumulateSink<A, S, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        AccumulateSink {
            accum: self.init,
            count: 0,
            step: self.step,
            finish: self.finish,
        }
    }
}

impl<A: Debug, S, F> Debug for Accumulate<A, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulate")
            .field("init", &self.init)
            .finish()
    }
}

/// The [`Sink`] of [`Accumulate`], and of every consumer of this module.
#[derive(Clone)]
pub struct AccumulateSink<A, S, F> {
    accum: A,
    count: usize,
    step: S,
    finish: F,
}

impl<T, A, S, F, O> Sink<T> for AccumulateSink<A, S, F>
where
    S: FnMut(&mut A, &T) -> bool,
    F: FnOnce(A, usize) -> Result<O, SinkError>,
{
    type Output = O;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if (self.step)(&mut self.accum, item) {
            self.count += 1;
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        (self.finish)(self.accum, self.count)
    }
}

impl<A: Debug, S, F> Debug for AccumulateSink<A, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccumulateSink")
            .field("accum", &self.accum)
            .field("count", &self.count)
            .finish()
    }
}
