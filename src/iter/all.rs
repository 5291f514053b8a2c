use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that tells whether every item satisfies a predicate.
/// Its [`Output`](Consumer::Output) is [`bool`], `true` for an empty sequence.
///
/// It stops on the first item that fails the predicate.
///
/// This consumer corresponds to [`Iterator::all()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::All};
///
/// assert_eq!([2, 4, 6].feed_into(All::new(|&x: &i32| x % 2 == 0)), Ok(true));
/// assert_eq!((1..).feed_into(All::new(|&x: &i32| x < 10)), Ok(false));
/// ```
#[derive(Debug, Clone)]
pub struct All<P> {
    pred: P,
}

impl<P> All<P> {
    /// Creates a consumer telling whether `pred` returns `true` for every item.
    #[inline]
    pub const fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<P> ConsumerBase for All<P> {}

impl<T, P> Consumer<T> for All<P>
where
    P: FnMut(&T) -> bool,
{
    type Output = bool;
    type Sink = AllSink<P>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        AllSink {
            holds: true,
            pred: self.pred,
        }
    }
}

/// The [`Sink`] of [`All`].
#[derive(Clone)]
pub struct AllSink<P> {
    holds: bool,
    pred: P,
}

impl<T, P> Sink<T> for AllSink<P>
where
    P: FnMut(&T) -> bool,
{
    type Output = bool;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if (self.pred)(item) {
            ControlFlow::Continue(())
        } else {
            self.holds = false;
            ControlFlow::Break(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.holds)
    }
}

impl<P> Debug for AllSink<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllSink")
            .field("holds", &self.holds)
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
        fn all_match(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            all_match_impl(nums)?;
        }
    }

    fn all_match_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || All::new(|&num: &i32| num > 0),
            should_break_pred: |mut iter| !iter.all(|num| num > 0),
            pred: |mut iter, output, remaining| {
                if output != Ok(iter.all(|num| num > 0)) {
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
