use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Always, Predicate};

/// A consumer that tells whether any item satisfies a predicate.
/// Its [`Output`](Consumer::Output) is [`bool`].
///
/// Without a predicate, it tells whether the sequence has any item at all
/// and stops right on the first one.
///
/// This consumer corresponds to [`Iterator::any()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::Any};
///
/// assert_eq!((1..).feed_into(Any::matching(|&x: &i32| x * x > 50)), Ok(true));
/// assert_eq!(std::iter::empty::<i32>().feed_into(Any::new()), Ok(false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Any<P = Always> {
    pred: P,
}

impl Any {
    /// Creates a consumer telling whether the sequence has any item.
    #[inline]
    pub const fn new() -> Self {
        Self { pred: Always }
    }
}

impl<P> Any<P> {
    /// Creates a consumer telling whether `pred` returns `true` for any item.
    #[inline]
    pub const fn matching(pred: P) -> Self {
        Self { pred }
    }
}

impl<P> ConsumerBase for Any<P> {}

impl<T, P> Consumer<T> for Any<P>
where
    P: Predicate<T>,
{
    type Output = bool;
    type Sink = AnySink<P>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        AnySink {
            found: false,
            pred: self.pred,
        }
    }
}

/// The [`Sink`] of [`Any`].
#[derive(Clone)]
pub struct AnySink<P> {
    found: bool,
    pred: P,
}

impl<T, P> Sink<T> for AnySink<P>
where
    P: Predicate<T>,
{
    type Output = bool;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.pred.test(item) {
            self.found = true;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.found)
    }
}

impl<P> Debug for AnySink<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnySink")
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
        fn any_item(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            any_item_impl(nums)?;
        }

        #[test]
        fn any_match(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            any_match_impl(nums)?;
        }
    }

    fn any_item_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Any::new,
            should_break_pred: |mut iter| iter.next().is_some(),
            pred: |mut iter, output, remaining| {
                if output != Ok(iter.next().is_some()) {
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

    fn any_match_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || Any::matching(|&num: &i32| num > 0),
            should_break_pred: |mut iter| iter.any(|num| num > 0),
            pred: |mut iter, output, remaining| {
                if output != Ok(iter.any(|num| num > 0)) {
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
