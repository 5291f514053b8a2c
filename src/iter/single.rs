use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Always, Or, Predicate};

/// A consumer that takes the only item, or the only item satisfying a predicate.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// It stops as soon as it sees a second (matching) item, which makes it fail
/// with [`SinkError::MoreThanOneElement`] ([`SinkError::MoreThanOneMatch`] with a
/// predicate). If there is none, it fails with [`SinkError::Empty`]
/// ([`SinkError::NoMatch`] with a predicate).
///
/// The fallbacks set with [`or()`](Single::or) and [`or_default()`](Single::or_default)
/// only apply when there is none, never when there are too many.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, SinkError, iter::Single};
///
/// let admins = Single::matching(|name: &&str| name.starts_with("admin"));
/// assert_eq!(["bob", "admin-eve", "carol"].feed_into(admins.clone()), Ok("admin-eve"));
/// assert_eq!(
///     ["admin-bob", "admin-eve"].feed_into(admins.or("root")),
///     Err(SinkError::MoreThanOneMatch),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Single<P = Always> {
    pred: P,
}

impl Single {
    /// Creates a consumer taking the only item.
    #[inline]
    pub const fn new() -> Self {
        Self { pred: Always }
    }
}

impl<P> Single<P> {
    /// Creates a consumer taking the only item for which `pred` returns `true`.
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

impl<P> ConsumerBase for Single<P> {}

impl<T, P> Consumer<T> for Single<P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;
    type Sink = SingleSink<T, P>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        SingleSink {
            state: State::None,
            pred: self.pred,
        }
    }
}

/// The [`Sink`] of [`Single`].
#[derive(Clone)]
pub struct SingleSink<T, P> {
    state: State<T>,
    pred: P,
}

#[derive(Debug, Clone)]
enum State<T> {
    None,
    One(T),
    Many,
}

impl<T, P> Sink<T> for SingleSink<T, P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if !self.pred.test(item) {
            return ControlFlow::Continue(());
        }

        match self.state {
            State::None => {
                self.state = State::One(item.clone());
                ControlFlow::Continue(())
            }
            State::One(_) | State::Many => {
                self.state = State::Many;
                ControlFlow::Break(())
            }
        }
    }

    fn finish(self) -> Result<Self::Output, SinkError> {
        match self.state {
            State::None => Err(<P as Predicate<T>>::none_error()),
            State::One(item) => Ok(item),
            State::Many => Err(<P as Predicate<T>>::many_error()),
        }
    }
}

impl<T: Debug, P> Debug for SingleSink<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleSink")
            .field("state", &self.state)
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
        fn single_item(
            nums in propvec(any::<i32>(), ..=3),
        ) {
            single_item_impl(nums)?;
        }

        #[test]
        fn single_match_or(
            nums in propvec(-3..3_i32, ..=5),
        ) {
            single_match_or_impl(nums)?;
        }
    }

    fn single_item_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: Single::new,
            should_break_pred: |iter| iter.count() >= 2,
            pred: |mut iter, output, remaining| {
                let expected = match (iter.next(), iter.next()) {
                    (None, _) => Err(SinkError::Empty),
                    (Some(num), None) => Ok(num),
                    (Some(_), Some(_)) => Err(SinkError::MoreThanOneElement),
                };

                if output != expected {
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

    fn single_match_or_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || Single::matching(|&num: &i32| num > 0).or(0),
            should_break_pred: |iter| iter.filter(|&num| num > 0).count() >= 2,
            pred: |mut iter, output, remaining| {
                let mut matches = iter.by_ref().filter(|&num| num > 0);
                let expected = match (matches.next(), matches.next()) {
                    (None, _) => Ok(0),
                    (Some(num), None) => Ok(num),
                    (Some(_), Some(_)) => Err(SinkError::MoreThanOneMatch),
                };

                if output != expected {
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
