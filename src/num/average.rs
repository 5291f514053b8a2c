use std::marker::PhantomData;

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase},
};

use super::{Accumulate, AccumulateSink, Finish, Step};

/// A consumer that computes the arithmetic mean of primitive numbers.
///
/// Its [`Output`](Consumer::Output) is an `f64`, or an `f32` for `f32` items.
/// Integers are summed in a wider integer type and `f32`s in an `f64`, so the
/// running total doesn't lose what the mean needs.
///
/// It accepts `N` items as well as `Option<N>` items:
///
/// - Over `N` items, it fails with [`SinkError::Empty`] if there are none.
/// - Over `Option<N>` items, the `None`s are neither summed nor counted, and
///   the output is `None` if nothing was left.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, SinkError, num::Average};
///
/// assert_eq!([1, 2, 4, 5].feed_into(Average::<i32>::new()), Ok(3.0));
/// assert_eq!([Some(1), None, Some(2)].feed_into(Average::<u8>::new()), Ok(Some(1.5)));
///
/// assert_eq!(std::iter::empty::<u8>().feed_into(Average::<u8>::new()), Err(SinkError::Empty));
/// assert_eq!([None].feed_into(Average::<u8>::new()), Ok(None));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Average<N> {
    _marker: PhantomData<fn() -> N>,
}

impl<N> ConsumerBase for Average<N> {}

macro_rules! average_impl {
    ($num_ty:ty => $sum_ty:ty, $out_ty:ty) => {
        impl Average<$num_ty> {
            /// Creates a consumer computing the mean.
            #[inline]
            pub const fn new() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl Default for Average<$num_ty> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl Consumer<$num_ty> for Average<$num_ty> {
            type Output = $out_ty;
            type Sink = AccumulateSink<$sum_ty, Step<$sum_ty, $num_ty>, Finish<$sum_ty, $out_ty>>;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn into_sink(self) -> Self::Sink {
                let step: Step<$sum_ty, $num_ty> = |sum, &num| {
                    *sum += num as $sum_ty;
                    true
                };
                let finish: Finish<$sum_ty, $out_ty> = |sum, count| match count {
                    0 => Err(SinkError::Empty),
                    count => Ok((sum as f64 / count as f64) as $out_ty),
                };

                Consumer::<$num_ty>::into_sink(Accumulate::new(<$sum_ty>::default(), step, finish))
            }
        }

        impl Consumer<Option<$num_ty>> for Average<$num_ty> {
            type Output = Option<$out_ty>;
            type Sink = AccumulateSink<
                $sum_ty,
                Step<$sum_ty, Option<$num_ty>>,
                Finish<$sum_ty, Option<$out_ty>>,
            >;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn into_sink(self) -> Self::Sink {
                let step: Step<$sum_ty, Option<$num_ty>> = |sum, num| match *num {
                    Some(num) => {
                        *sum += num as $sum_ty;
                        true
                    }
                    None => false,
                };
                let finish: Finish<$sum_ty, Option<$out_ty>> = |sum, count| {
                    Ok((count > 0).then(|| (sum as f64 / count as f64) as $out_ty))
                };

                Consumer::<Option<$num_ty>>::into_sink(Accumulate::new(
                    <$sum_ty>::default(),
                    step,
                    finish,
                ))
            }
        }
    };
}

macro_rules! average_impls {
    ($($num_ty:ty => $sum_ty:ty, $out_ty:ty;)*) => {
        $(average_impl!($num_ty => $sum_ty, $out_ty);)*
    };
}

average_impls! {
    i8 => i128, f64;
    i16 => i128, f64;
    i32 => i128, f64;
    i64 => i128, f64;
    isize => i128, f64;
    u8 => u128, f64;
    u16 => u128, f64;
    u32 => u128, f64;
    u64 => u128, f64;
    usize => u128, f64;
    i128 => f64, f64;
    u128 => f64, f64;
    f32 => f64, f32;
    f64 => f64, f64;
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::OnePass;
    use crate::test_utils::{BasicSinkTester, PredError, SinkTesterExt};

    use super::*;

    proptest! {
        #[test]
        fn ints(
            nums in propvec(-100..100_i32, ..=5),
        ) {
            ints_impl(nums)?;
        }

        #[test]
        fn skips_none(
            nums in propvec(proptest::option::of(0..100_u16), ..=5),
        ) {
            skips_none_impl(nums)?;
        }
    }

    fn ints_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Average::<i32>::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.collect();
                let expected = if items.is_empty() {
                    Err(SinkError::Empty)
                } else {
                    Ok(items.iter().map(|&num| f64::from(num)).sum::<f64>() / items.len() as f64)
                };

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

    fn skips_none_impl(nums: Vec<Option<u16>>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Average::<u16>::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.flatten().collect();
                let expected = (!items.is_empty()).then(|| {
                    items.iter().map(|&num| f64::from(num)).sum::<f64>() / items.len() as f64
                });

                if output != Ok(expected) {
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

    #[test]
    fn f32_summed_wide() {
        // Summed in `f32`, the ones would vanish next to 2^24.
        let big = 16_777_216.0_f32;
        let mean = [big, 1.0, 1.0].feed_into(Average::<f32>::new());

        assert_eq!(mean, Ok(5_592_406.0));
    }
}
