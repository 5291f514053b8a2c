use crate::slice::Index;

/// A failure a [`Sink`](crate::Sink) reports when it is asked for its result.
///
/// These are only ever produced by [`Sink::finish()`](crate::Sink::finish),
/// after the pass has ended. Errors raised while items are being pulled
/// (by the source or by a user closure) are never turned into a `SinkError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SinkError {
    /// The sequence had no elements, but the reduction needs at least one.
    #[error("sequence contains no elements")]
    Empty,
    /// No element satisfied the predicate.
    #[error("sequence contains no matching element")]
    NoMatch,
    /// The sequence had more than one element, but exactly one was expected.
    #[error("sequence contains more than one element")]
    MoreThanOneElement,
    /// More than one element satisfied the predicate, but exactly one was expected.
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,
    /// The requested index does not exist in the sequence.
    #[error("index {index} is out of range")]
    IndexOutOfRange {
        /// The index that was requested.
        index: Index,
    },
    /// Two elements produced the same key for a keyed collection.
    #[error("an element with the same key has already been added")]
    DuplicateKey,
}

/// The failure of a whole [`Request`](crate::Request): at least one of its
/// sinks could not produce a result.
///
/// Only the first failure, in registration order, is kept. Later failures are
/// counted but dropped.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, SinkError, iter::{Count, First, Last}};
///
/// let err = std::iter::empty::<i32>()
///     .request(Count::new())
///     .and(First::new())
///     .and(Last::new())
///     .finalize()
///     .unwrap_err();
///
/// assert_eq!(err.position(), 1);
/// assert_eq!(err.failed(), 2);
/// assert_eq!(err.into_inner(), SinkError::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sink #{position} failed to produce a result: {source}")]
pub struct AggregateError {
    position: usize,
    failed: usize,
    source: SinkError,
}

impl AggregateError {
    pub(crate) const fn new(position: usize, source: SinkError) -> Self {
        Self {
            position,
            failed: 1,
            source,
        }
    }

    /// Returns the first failure.
    #[inline]
    pub const fn first(&self) -> &SinkError {
        &self.source
    }

    /// Unwraps the first failure.
    ///
    /// A request with a single consumer can use this to recover the
    /// original cause.
    #[inline]
    pub fn into_inner(self) -> SinkError {
        self.source
    }

    /// Position, in registration order (starting at 0), of the sink
    /// that produced the first failure.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// How many sinks failed in total.
    #[inline]
    pub const fn failed(&self) -> usize {
        self.failed
    }
}

/// Collects sink results during aggregation, keeping the first failure.
#[derive(Debug, Default)]
pub(crate) struct Failures {
    first: Option<AggregateError>,
}

impl Failures {
    /// Records the result of the sink at `position`, returning its output on success.
    pub(crate) fn record<O>(&mut self, position: usize, result: Result<O, SinkError>) -> Option<O> {
        match result {
            Ok(output) => Some(output),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(position, error = %err, "sink failed to produce a result");

                match self.first {
                    Some(ref mut first) => first.failed += 1,
                    None => self.first = Some(AggregateError::new(position, err)),
                }
                None
            }
        }
    }

    /// Turns the outputs gathered by [`record()`](Failures::record) into the final outcome.
    ///
    /// `outputs` is `None` if and only if some sink failed.
    pub(crate) fn into_result<O>(self, outputs: Option<O>) -> Result<O, AggregateError> {
        match (self.first, outputs) {
            (Some(err), _) => Err(err),
            (None, Some(outputs)) => Ok(outputs),
            (None, None) => unreachable!("an output is missing but no failure was recorded"),
        }
    }
}
