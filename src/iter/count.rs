use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Always, Predicate};

/// A consumer that counts the items, or the items satisfying a predicate.
/// Its [`Output`](Consumer::Output) is [`usize`].
///
/// It never stops early and never fails.
///
/// This consumer corresponds to [`Iterator::count()`].
///
/// # Overflow Behavior
///
/// This consumer does no guarding against overflows, so feeding it
/// more than [`usize::MAX`] items either produces the wrong result or panics.
/// If overflow checks are enabled, a panic is guaranteed.
/// This is similar to [`Iterator::count()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::Count};
///
/// let (all, evens) = [1, 2, 3, 4, 5]
///     .request(Count::new())
///     .and(Count::matching(|&x: &i32| x % 2 == 0))
///     .finalize()
///     .unwrap();
///
/// assert_eq!((all, evens), (5, 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Count<P = Always> {
    pred: P,
}

impl Count {
    /// Creates a consumer counting every item.
    #[inline]
    pub const fn new() -> Self {
        Self { pred: Always }
    }
}

impl<P> Count<P> {
    /// Creates a consumer counting the items for which `pred` returns `true`.
    #[inline]
    pub const fn matching(pred: P) -> Self {
        Self { pred }
    }
}

impl<P> ConsumerBase for Count<P> {}

impl<T, P> Consumer<T> for Count<P>
where
    P: Predicate<T>,
{
    type Output = usize;
    type Sink = CountSink<P>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        CountSink {
            count: 0,
            pred: self.pred,
        }
    }
}

/// The [`Sink`] of [`Count`].
#[derive(Clone)]
pub struct CountSink<P> {
    count: usize,
    pred: P,
}

impl<T, P> Sink<T> for CountSink<P>
where
    P: Predicate<T>,
{
    type Output = usize;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.pred.test(item) {
            // We don't care about overflow, like `Iterator::count()`.
            self.count += 1;
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.count)
    }
}

impl<P> Debug for CountSink<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountSink")
            .field("count", &self.count)
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
        fn all_items(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            all_items_impl(nums)?;
        }

        #[test]
        fn matching_items(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            matching_items_impl(nums)?;
        }
    }

    fn all_items_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Count::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if output != Ok(iter.count()) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }

    fn matching_items_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || Count::matching(|&num: &i32| num % 2 == 0),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if output != Ok(iter.filter(|&num| num % 2 == 0).count()) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }
}
