use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that reduces the items into one by repeatedly applying a function.
/// Its [`Output`](Consumer::Output) is the result of the reduction.
///
/// The first item is cloned to start the reduction. If there is none, it
/// fails with [`SinkError::Empty`].
///
/// This consumer corresponds to [`Iterator::reduce()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, SinkError, iter::Reduce};
///
/// let gcd = [84, 36, 60].feed_into(Reduce::new(|mut a: u32, &b: &u32| {
///     let mut b = b;
///     while b != 0 {
///         (a, b) = (b, a % b);
///     }
///     a
/// }));
/// assert_eq!(gcd, Ok(12));
///
/// let empty = std::iter::empty::<i32>().feed_into(Reduce::new(|a: i32, b: &i32| a + b));
/// assert_eq!(empty, Err(SinkError::Empty));
/// ```
#[derive(Debug, Clone)]
pub struct Reduce<F> {
    f: F,
}

impl<F> Reduce<F> {
    /// Creates a consumer reducing the items with `f`.
    #[inline]
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ConsumerBase for Reduce<F> {}

impl<T, F> Consumer<T> for Reduce<F>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    type Output = T;
    type Sink = ReduceSink<T, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ReduceSink {
            accum: None,
            f: self.f,
        }
    }
}

/// The [`Sink`] of [`Reduce`].
#[derive(Clone)]
pub struct ReduceSink<T, F> {
    accum: Option<T>,
    f: F,
}

impl<T, F> Sink<T> for ReduceSink<T, F>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    type Output = T;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.accum = Some(item.clone());
        ControlFlow::Continue(())
    }

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        self.accum = match self.accum.take() {
            Some(accum) => Some((self.f)(accum, item)),
            None => Some(item.clone()),
        };

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.accum.ok_or(SinkError::Empty)
    }
}

impl<T: Debug, F> Debug for ReduceSink<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReduceSink")
            .field("accum", &self.accum)
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
        fn wrapping_sum(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            wrapping_sum_impl(nums)?;
        }
    }

    fn wrapping_sum_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || Reduce::new(|accum: i32, &num: &i32| accum.wrapping_add(num)),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let expected = iter
                    .reduce(|accum, num| accum.wrapping_add(num))
                    .ok_or(SinkError::Empty);

                if output != expected {
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
