//! Binding one source to many consumers, and running them in one pass.
//!
//! A [`Request`] is built from a source and grown one consumer at a time with
//! [`Request::and()`]. Nothing is pulled from the source until the request is
//! [finalized](Request::finalize). Finalizing consumes the request, so a
//! source is never walked twice.
//!
//! Most requests start from [`OnePass::request()`] rather than [`Request::new()`].

mod consumer_set;
mod driver;
mod one_pass;

use std::{convert::Infallible, fmt::Debug};

use crate::AggregateError;

pub use consumer_set::*;
pub use one_pass::*;

/// A source together with an ordered list of consumers, not yet run.
///
/// The consumers are held in a flat tuple, which is also the shape of the
/// results. A request can hold up to 16 consumers.
///
/// # Examples
///
/// ```
/// use onepass::{Request, cmp::Min, iter::Last, num::Sum};
///
/// let (sum, min, last) = Request::new([4, 8, 15, 16, 23, 42])
///     .and(Sum::<i32>::new())
///     .and(Min::new())
///     .and(Last::new())
///     .finalize()
///     .unwrap();
///
/// assert_eq!((sum, min, last), (108, 4, 42));
/// ```
#[must_use = "a request does nothing until it is finalized"]
pub struct Request<I, C> {
    source: I,
    consumers: C,
}

impl<I: Iterator> Request<I, ()> {
    /// Creates a request over `source` with no consumer yet.
    ///
    /// Finalizing a request without any consumer does not pull from the source.
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
            consumers: (),
        }
    }
}

impl<I: Iterator, C> Request<I, C> {
    /// Appends a consumer to this request.
    ///
    /// Its result is appended to the tuple produced by [`finalize()`](Request::finalize).
    #[inline]
    pub fn and<D>(self, consumer: D) -> Request<I, C::Pushed>
    where
        C: Push<D>,
    {
        Request {
            source: self.source,
            consumers: self.consumers.push(consumer),
        }
    }

    /// Runs every consumer over the source in a single pass.
    ///
    /// The source is pulled until it is exhausted or no consumer wants more
    /// items. It is dropped before any result is computed. Results are then
    /// computed in registration order, all of them, even after one failed.
    ///
    /// # Errors
    ///
    /// If at least one sink fails to produce a result, an [`AggregateError`]
    /// carrying the first failure is returned instead of the tuple.
    ///
    /// # Panics
    ///
    /// Panics raised by the source or by a closure given to a consumer
    /// propagate as they are. Every sink built so far is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, SinkError, iter::{Count, First}};
    ///
    /// assert_eq!(
    ///     std::iter::empty::<i32>()
    ///         .request(Count::new())
    ///         .and(First::new().or(69))
    ///         .finalize(),
    ///     Ok((0, 69)),
    /// );
    ///
    /// let err = std::iter::empty::<i32>()
    ///     .request(Count::new())
    ///     .and(First::new())
    ///     .finalize()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.first(), &SinkError::Empty);
    /// ```
    pub fn finalize(self) -> Result<C::Output, AggregateError>
    where
        C: ConsumerSet<I::Item>,
    {
        let source = self.source.map(Ok::<_, Infallible>);
        match driver::drive(source, self.consumers.into_sinks()) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }
}

impl<I, T, E, C> Request<I, C>
where
    I: Iterator<Item = Result<T, E>>,
{
    /// Runs every consumer over the successful items of a fallible source.
    ///
    /// The consumers see `T`, not `Result<T, E>`. The first `Err(e)` pulled
    /// aborts the pass: every sink is dropped without computing its result,
    /// and `e` is returned unchanged as the outer error.
    ///
    /// # Errors
    ///
    /// The outer error is the source's. The inner one is the same as in
    /// [`finalize()`](Request::finalize).
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{Request, iter::Count, num::Sum};
    ///
    /// let ok = Request::new(["1", "2", "3"].map(str::parse::<u8>))
    ///     .and(Count::new())
    ///     .and(Sum::<u8>::new())
    ///     .try_finalize();
    /// assert_eq!(ok, Ok(Ok((3, 6))));
    ///
    /// let err = Request::new(["1", "two", "3"].map(str::parse::<u8>))
    ///     .and(Count::new())
    ///     .and(Sum::<u8>::new())
    ///     .try_finalize();
    /// assert!(err.is_err());
    /// ```
    pub fn try_finalize(self) -> Result<Result<C::Output, AggregateError>, E>
    where
        C: ConsumerSet<T>,
    {
        driver::drive(self.source, self.consumers.into_sinks())
    }
}

impl<I, C: Debug> Debug for Request<I, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("consumers", &self.consumers)
            .finish_non_exhaustive()
    }
}

#[inline(always)]
pub(crate) fn assert_request<I, C>(request: Request<I, C>) -> Request<I, C>
where
    I: Iterator,
    C: ConsumerSet<I::Item>,
{
    request
}
