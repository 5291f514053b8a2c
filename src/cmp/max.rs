use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Comparator, MaxByKey, PartialOrder};

/// A consumer that computes the maximum item.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// Items are compared with [`PartialOrd`] by default, values unordered with
/// themselves (like `NaN`) sorting below everything else. So `NaN` is only
/// the maximum if every item is `NaN`.
///
/// If several items are maximal, the first one is kept.
/// If there are no items, it fails with [`SinkError::Empty`].
///
/// This consumer corresponds to [`Iterator::max()`], except for ties.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, cmp::Max};
///
/// assert_eq!([3, 9, 2].feed_into(Max::new()), Ok(9));
/// assert_eq!([f64::NAN, 0.0].feed_into(Max::new()), Ok(0.0));
///
/// let longest = ["a", "the", "among", "shout"]
///     .feed_into(Max::by(|a: &&str, b: &&str| a.len().cmp(&b.len())));
/// assert_eq!(longest, Ok("among"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Max<C = PartialOrder> {
    cmp: C,
}

impl Max {
    /// Creates a consumer computing the maximum with [`PartialOrd`].
    #[inline]
    pub const fn new() -> Self {
        Self { cmp: PartialOrder }
    }

    /// Creates a consumer computing the item whose key is the greatest,
    /// keys being compared with [`PartialOrd`].
    ///
    /// The key of every item is computed exactly once.
    ///
    /// This corresponds to [`Iterator::max_by_key()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, cmp::Max};
    ///
    /// let oldest = [("ann", 31), ("bob", 45), ("cid", 45)]
    ///     .feed_into(Max::by_key(|&(_, age): &(&str, u32)| age));
    /// assert_eq!(oldest, Ok(("bob", 45)));
    /// ```
    #[inline]
    pub const fn by_key<F>(f: F) -> MaxByKey<F> {
        MaxByKey::new(f, PartialOrder)
    }

    /// Creates a consumer computing the item whose key is the greatest,
    /// keys being compared with `cmp`.
    #[inline]
    pub const fn by_key_with<F, C>(f: F, cmp: C) -> MaxByKey<F, C> {
        MaxByKey::new(f, cmp)
    }
}

impl<C> Max<C> {
    /// Creates a consumer computing the maximum with a comparer.
    ///
    /// This corresponds to [`Iterator::max_by()`].
    #[inline]
    pub const fn by(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<C> ConsumerBase for Max<C> {}

impl<T, C> Consumer<T> for Max<C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Output = T;
    type Sink = MaxSink<T, C>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MaxSink {
            max: None,
            cmp: self.cmp,
        }
    }
}

/// The [`Sink`] of [`Max`].
#[derive(Clone)]
pub struct MaxSink<T, C> {
    max: Option<T>,
    cmp: C,
}

impl<T, C> Sink<T> for MaxSink<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Output = T;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.max = Some(item.clone());
        ControlFlow::Continue(())
    }

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        match self.max {
            Some(ref mut max) => {
                if self.cmp.cmp(item, max) == Ordering::Greater {
                    max.clone_from(item);
                }
            }
            None => self.max = Some(item.clone()),
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.max.ok_or(SinkError::Empty)
    }
}

impl<T: Debug, C> Debug for MaxSink<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxSink").field("max", &self.max).finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::cmp::test_utils::Id;
    use crate::test_utils::{BasicSinkTester, PredError, SinkTesterExt};

    use super::*;

    proptest! {
        #[test]
        fn first_of_maxima(
            nums in propvec(-3..3_i32, ..=5),
        ) {
            first_of_maxima_impl(nums)?;
        }

        #[test]
        fn floats(
            nums in propvec(prop_oneof![Just(f64::NAN), -2.0..2.0_f64], ..=5),
        ) {
            floats_impl(nums)?;
        }
    }

    fn first_of_maxima_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().enumerate().map(|(id, &num)| Id { id, num }),
            consumer_factory: Max::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                // `Iterator::max()` keeps the last one, so search the reversed sequence.
                let expected = iter.collect::<Vec<_>>().into_iter().rev().max();

                if !Id::full_eq_opt(output.ok(), expected) {
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

    fn floats_impl(nums: Vec<f64>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Max::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.collect();
                let expected = items
                    .iter()
                    .copied()
                    .filter(|num| !num.is_nan())
                    .reduce(f64::max)
                    .or_else(|| items.first().copied());

                let correct = match (output, expected) {
                    (Ok(max), Some(expected)) => {
                        max == expected || (max.is_nan() && expected.is_nan())
                    }
                    (Err(SinkError::Empty), None) => true,
                    _ => false,
                };

                if !correct {
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
