use std::marker::PhantomData;

use crate::sink::{Consumer, ConsumerBase};

use super::{Accumulate, AccumulateSink, Finish, Step};

/// A consumer that computes the sum of primitive numbers.
/// Its [`Output`](Consumer::Output) is the sum, of the same type as the items.
///
/// It accepts `N` items as well as `Option<N>` items, skipping the `None`s.
/// It never fails, and overflows the way [`Iterator::sum()`] does.
///
/// This consumer corresponds to [`Iterator::sum()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, num::Sum};
///
/// assert_eq!([1, 2, 3].feed_into(Sum::<i32>::new()), Ok(6));
/// assert_eq!([Some(1.5), None, Some(2.0)].feed_into(Sum::<f64>::new()), Ok(3.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sum<N> {
    _marker: PhantomData<fn() -> N>,
}

impl<N> ConsumerBase for Sum<N> {}

macro_rules! sum_impl {
    ($num_ty:ty, $zero:expr) => {
        impl Sum<$num_ty> {
            /// Creates a consumer starting from the *additive identity* (“zero”) of the type.
            #[inline]
            pub const fn new() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl Default for Sum<$num_ty> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl Consumer<$num_ty> for Sum<$num_ty> {
            type Output = $num_ty;
            type Sink = AccumulateSink<$num_ty, Step<$num_ty, $num_ty>, Finish<$num_ty, $num_ty>>;

            #[inline]
            fn into_sink(self) -> Self::Sink {
                let step: Step<$num_ty, $num_ty> = |sum, &num| {
                    *sum += num;
                    true
                };
                let finish: Finish<$num_ty, $num_ty> = |sum, _| Ok(sum);

                Consumer::<$num_ty>::into_sink(Accumulate::new($zero, step, finish))
            }
        }

        impl Consumer<Option<$num_ty>> for Sum<$num_ty> {
            type Output = $num_ty;
            type Sink =
                AccumulateSink<$num_ty, Step<$num_ty, Option<$num_ty>>, Finish<$num_ty, $num_ty>>;

            #[inline]
            fn into_sink(self) -> Self::Sink {
                let step: Step<$num_ty, Option<$num_ty>> = |sum, num| match *num {
                    Some(num) => {
                        *sum += num;
                        true
                    }
                    None => false,
                };
                let finish: Finish<$num_ty, $num_ty> = |sum, _| Ok(sum);

                Consumer::<Option<$num_ty>>::into_sink(Accumulate::new($zero, step, finish))
            }
        }
    };
}

macro_rules! int_impls {
    ($($int_ty:ty)*) => {
        $(sum_impl!($int_ty, 0);)*
    };
}

macro_rules! float_impls {
    ($($float_ty:ty)*) => {
        // `Sum` implementations of floats have the starting value
        // of -0.0, not 0.0.
        // See: https://doc.rust-lang.org/1.90.0/std/iter/trait.Iterator.html#method.sum
        $(sum_impl!($float_ty, -0.0);)*
    };
}

int_impls!(
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
);

float_impls!(f32 f64);
