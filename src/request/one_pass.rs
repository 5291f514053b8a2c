use crate::{SinkError, sink::Consumer};

use super::{Request, assert_request};

/// Extends every [`IntoIterator`] with the entry points of this crate.
///
/// This trait is automatically implemented for all [`IntoIterator`] types.
/// To use its methods, import it (it is in the [prelude](crate::prelude)).
pub trait OnePass: IntoIterator + Sized {
    /// Starts a [`Request`] over this sequence with a first consumer.
    ///
    /// Add more with [`Request::and()`], then run them all at once with
    /// [`Request::finalize()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, iter::{Count, Last}, slice::Slice};
    ///
    /// let lines = "alpha\nbeta\ngamma\ndelta".lines();
    ///
    /// let (count, head, last) = lines
    ///     .request(Count::new())
    ///     .and(Slice::take(2))
    ///     .and(Last::new())
    ///     .finalize()
    ///     .unwrap();
    ///
    /// assert_eq!(count, 4);
    /// assert_eq!(head, ["alpha", "beta"]);
    /// assert_eq!(last, "delta");
    /// ```
    #[inline]
    fn request<C>(self, consumer: C) -> Request<Self::IntoIter, (C,)>
    where
        C: Consumer<Self::Item>,
    {
        assert_request(Request::new(self).and(consumer))
    }

    /// Runs a single consumer over this sequence and returns its result.
    ///
    /// This is a request with one consumer, whose failure is reported as the
    /// [`SinkError`] itself.
    ///
    /// # Errors
    ///
    /// Returns the failure of the consumer's sink, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, SinkError, iter::Single};
    ///
    /// assert_eq!([7].feed_into(Single::new()), Ok(7));
    /// assert_eq!([7, 8].feed_into(Single::new()), Err(SinkError::MoreThanOneElement));
    /// ```
    #[inline]
    fn feed_into<C>(self, consumer: C) -> Result<C::Output, SinkError>
    where
        C: Consumer<Self::Item>,
    {
        match self.request(consumer).finalize() {
            Ok((output,)) => Ok(output),
            Err(err) => Err(err.into_inner()),
        }
    }
}

impl<I: IntoIterator> OnePass for I {}
