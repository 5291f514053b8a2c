use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Comparator, MinByKey, PartialOrder};

/// A consumer that computes the minimum item.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// Items are compared with [`PartialOrd`] by default, values unordered with
/// themselves (like `NaN`) sorting below everything else. So a `NaN` is
/// propagated: it is the minimum as soon as it shows up, and the sink stops
/// right there.
///
/// If several items are minimal, the first one is kept.
/// If there are no items, it fails with [`SinkError::Empty`].
///
/// This consumer corresponds to [`Iterator::min()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, cmp::Min};
///
/// assert_eq!([3, 1, 2].feed_into(Min::new()), Ok(1));
/// assert!([1.0, f64::NAN, 0.0].feed_into(Min::new()).unwrap().is_nan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Min<C = PartialOrder> {
    cmp: C,
}

impl Min {
    /// Creates a consumer computing the minimum with [`PartialOrd`].
    #[inline]
    pub const fn new() -> Self {
        Self { cmp: PartialOrder }
    }

    /// Creates a consumer computing the item whose key is the least,
    /// keys being compared with [`PartialOrd`].
    ///
    /// The key of every item is computed exactly once.
    ///
    /// This corresponds to [`Iterator::min_by_key()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, cmp::Min};
    ///
    /// let closest = [7, -2, 5, 2].feed_into(Min::by_key(|&num: &i32| num.abs()));
    /// assert_eq!(closest, Ok(-2));
    /// ```
    #[inline]
    pub const fn by_key<F>(f: F) -> MinByKey<F> {
        MinByKey::new(f, PartialOrder)
    }

    /// Creates a consumer computing the item whose key is the least,
    /// keys being compared with `cmp`.
    #[inline]
    pub const fn by_key_with<F, C>(f: F, cmp: C) -> MinByKey<F, C> {
        MinByKey::new(f, cmp)
    }
}

impl<C> Min<C> {
    /// Creates a consumer computing the minimum with a comparer.
    ///
    /// This corresponds to [`Iterator::min_by()`].
    #[inline]
    pub const fn by(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<C> ConsumerBase for Min<C> {}

impl<T, C> Consumer<T> for Min<C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Output = T;
    type Sink = MinSink<T, C>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MinSink {
            min: None,
            cmp: self.cmp,
        }
    }
}

/// The [`Sink`] of [`Min`].
#[derive(Clone)]
pub struct MinSink<T, C> {
    min: Option<T>,
    cmp: C,
}

impl<T, C> MinSink<T, C>
where
    C: Comparator<T>,
{
    #[inline]
    fn stop_if_bottom(&mut self, item: &T) -> ControlFlow<()> {
        if self.cmp.is_bottom(item) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, C> Sink<T> for MinSink<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Output = T;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.min = Some(item.clone());
        self.stop_if_bottom(item)
    }

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        match self.min {
            Some(ref mut min) => {
                if self.cmp.cmp(item, min) == Ordering::Less {
                    min.clone_from(item);
                } else {
                    return ControlFlow::Continue(());
                }
            }
            None => self.min = Some(item.clone()),
        }

        self.stop_if_bottom(item)
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.min.ok_or(SinkError::Empty)
    }
}

impl<T: Debug, C> Debug for MinSink<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinSink").field("min", &self.min).finish()
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
        fn first_of_minima(
            nums in propvec(-3..3_i32, ..=5),
        ) {
            first_of_minima_impl(nums)?;
        }

        #[test]
        fn nan_propagates(
            nums in propvec(prop_oneof![Just(f64::NAN), -2.0..2.0_f64], ..=5),
        ) {
            nan_propagates_impl(nums)?;
        }
    }

    fn first_of_minima_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().enumerate().map(|(id, &num)| Id { id, num }),
            consumer_factory: Min::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if !Id::full_eq_opt(output.ok(), iter.min()) {
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

    fn nan_propagates_impl(nums: Vec<f64>) -> TestCaseResult {
        let first_nan = nums.iter().position(|num| num.is_nan());

        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Min::new,
            should_break_pred: |_| first_nan.is_some(),
            pred: |iter, output, remaining| {
                let expected = match first_nan {
                    Some(_) => Some(f64::NAN),
                    None => nums.iter().copied().reduce(f64::min),
                };
                let correct = match (output, expected) {
                    (Ok(min), Some(expected)) => {
                        min == expected || (min.is_nan() && expected.is_nan())
                    }
                    (Err(SinkError::Empty), None) => true,
                    _ => false,
                };
                let consumed = first_nan.map_or(nums.len(), |position| position + 1);

                if !correct {
                    Err(PredError::IncorrectOutput)
                } else if iter
                    .skip(consumed)
                    .map(f64::to_bits)
                    .ne(remaining.map(f64::to_bits))
                {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }
}
