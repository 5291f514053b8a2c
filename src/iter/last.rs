use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Always, Or, Predicate};

/// A consumer that takes the last item, or the last item satisfying a predicate.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// It never stops early. If there is no such item, it fails with
/// [`SinkError::Empty`], or [`SinkError::NoMatch`] if a predicate was given.
///
/// This consumer corresponds to [`Iterator::last()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::Last};
///
/// let words = "one two three four".split(' ');
/// let (last, last_short) = words
///     .request(Last::new())
///     .and(Last::matching(|word: &&str| word.len() == 3))
///     .finalize()
///     .unwrap();
///
/// assert_eq!((last, last_short), ("four", "two"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Last<P = Always> {
    pred: P,
}

impl Last {
    /// Creates a consumer taking the last item.
    #[inline]
    pub const fn new() -> Self {
        Self { pred: Always }
    }
}

impl<P> Last<P> {
    /// Creates a consumer taking the last item for which `pred` returns `true`.
    #[inline]
    pub const fn matching(pred: P) -> Self {
        Self { pred }
    }

    /// Makes the consumer output `fallback` if there is no such item.
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

impl<P> ConsumerBase for Last<P> {}

impl<T, P> Consumer<T> for Last<P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;
    type Sink = LastSink<T, P>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        LastSink {
            last: None,
            pred: self.pred,
        }
    }
}

/// The [`Sink`] of [`Last`].
#[derive(Clone)]
pub struct LastSink<T, P> {
    last: Option<T>,
    pred: P,
}

impl<T, P> Sink<T> for LastSink<T, P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.pred.test(item) {
            match self.last {
                // Reuse the allocation of the previous one, if any.
                Some(ref mut last) => last.clone_from(item),
                None => self.last = Some(item.clone()),
            }
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.last.ok_or_else(<P as Predicate<T>>::none_error)
    }
}

impl<T: Debug, P> Debug for LastSink<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastSink").field("last", &self.last).finish()
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
        fn last_item(
            words in propvec("[a-c]{0,3}", ..=5),
        ) {
            last_item_impl(words)?;
        }

        #[test]
        fn last_match_or_default(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            last_match_or_default_impl(nums)?;
        }
    }

    fn last_item_impl(words: Vec<String>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || words.iter().cloned(),
            consumer_factory: Last::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if output != iter.last().ok_or(SinkError::Empty) {
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

    fn last_match_or_default_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || Last::matching(|&num: &i32| num < 0).or_default(),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if output != Ok(iter.filter(|&num| num < 0).last().unwrap_or_default()) {
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
