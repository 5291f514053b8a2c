use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Always, Or, Predicate};

/// A consumer that takes the first item, or the first item satisfying a predicate.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// It stops as soon as it has found it. If there is none, it fails with
/// [`SinkError::Empty`], or [`SinkError::NoMatch`] if a predicate was given.
/// Use [`or()`](First::or) or [`or_default()`](First::or_default) to
/// fall back to a value instead.
///
/// This consumer corresponds to [`Iterator::find()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, SinkError, iter::First};
///
/// assert_eq!([3, 8, 5].feed_into(First::new()), Ok(3));
/// assert_eq!((1..).feed_into(First::matching(|&x: &i32| x % 7 == 0)), Ok(7));
///
/// let none = [3, 5].feed_into(First::matching(|&x: &i32| x % 2 == 0));
/// assert_eq!(none, Err(SinkError::NoMatch));
/// ```
#[derive(Debug, Clone, Default)]
pub struct First<P = Always> {
    pred: P,
}

impl First {
    /// Creates a consumer taking the first item.
    #[inline]
    pub const fn new() -> Self {
        Self { pred: Always }
    }
}

impl<P> First<P> {
    /// Creates a consumer taking the first item for which `pred` returns `true`.
    #[inline]
    pub const fn matching(pred: P) -> Self {
        Self { pred }
    }

    /// Makes the consumer output `fallback` if there is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, iter::First};
    ///
    /// assert_eq!(std::iter::empty().feed_into(First::new().or(69)), Ok(69));
    /// ```
    #[inline]
    pub const fn or<O>(self, fallback: O) -> Or<Self, O> {
        Or::new(self, fallback)
    }

    /// Makes the consumer output [`O::default()`](Default::default) if there is no such item.
    #[inline]
    pub fn or_default<O: Default>(self) -> Or<Self, O> {
        Or::new(self, O::default())
    }
}

impl<P> ConsumerBase for First<P> {}

impl<T, P> Consumer<T> for First<P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;
    type Sink = FirstSink<T, P>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        FirstSink {
            found: None,
            pred: self.pred,
        }
    }
}

/// The [`Sink`] of [`First`].
#[derive(Clone)]
pub struct FirstSink<T, P> {
    found: Option<T>,
    pred: P,
}

impl<T, P> Sink<T> for FirstSink<T, P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.pred.test(item) {
            self.found = Some(item.clone());
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.found.ok_or_else(<P as Predicate<T>>::none_error)
    }
}

impl<T: Debug, P> Debug for FirstSink<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstSink")
            .field("found", &self.found)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::{BasicSinkTester, PredError, SinkTesterExt};

    use super::*;

    proptest! {
        #[test]
        fn first_item(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            first_item_impl(nums)?;
        }

        #[test]
        fn first_match(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            first_match_impl(nums)?;
        }

        #[test]
        fn first_match_or(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            first_match_or_impl(nums)?;
        }
    }

    fn first_item_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: First::new,
            should_break_pred: |mut iter| iter.next().is_some(),
            pred: |mut iter, output, remaining| {
                if output != iter.next().ok_or(SinkError::Empty) {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }

    fn first_match_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || First::matching(|&num: &i32| num > 0),
            should_break_pred: |mut iter| iter.any(|num| num > 0),
            pred: |mut iter, output, remaining| {
                if output != iter.find(|&num| num > 0).ok_or(SinkError::NoMatch) {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }

    fn first_match_or_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || First::matching(|&num: &i32| num > 0).or(-1),
            should_break_pred: |mut iter| iter.any(|num| num > 0),
            pred: |mut iter, output, remaining| {
                if output != Ok(iter.find(|&num| num > 0).unwrap_or(-1)) {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }
}
