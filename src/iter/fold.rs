use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that accumulates items using a function.
/// Its [`Output`](Consumer::Output) is the final accumulator.
///
/// This consumer corresponds to [`Iterator::fold()`], except that
/// the accumulated value is mutated in place.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::Fold};
///
/// let (sum, product) = [1, 2, 3, 4]
///     .request(Fold::new(0, |sum: &mut i32, &num: &i32| *sum += num))
///     .and(Fold::new(1, |product: &mut i32, &num: &i32| *product *= num))
///     .finalize()
///     .unwrap();
///
/// assert_eq!((sum, product), (10, 24));
/// ```
#[derive(Clone)]
pub struct Fold<A, F> {
    init: A,
    f: F,
}

impl<A, F> Fold<A, F> {
    /// Creates a consumer starting from `init` and applying `f` to every item.
    #[inline]
    pub const fn new(init: A, f: F) -> Self {
        Self { init, f }
    }
}

impl<A, F> ConsumerBase for Fold<A, F> {}

impl<T, A, F> Consumer<T> for Fold<A, F>
where
    F: FnMut(&mut A, &T),
{
    type Output = A;
    type Sink = FoldSink<A, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        FoldSink {
            accum: self.init,
            f: self.f,
        }
    }
}

impl<A: Debug, F> Debug for Fold<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold").field("init", &self.init).finish()
    }
}

/// The [`Sink`] of [`Fold`].
#[derive(Clone)]
pub struct FoldSink<A, F> {
    accum: A,
    f: F,
}

impl<T, A, F> Sink<T> for FoldSink<A, F>
where
    F: FnMut(&mut A, &T),
{
    type Output = A;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        (self.f)(&mut self.accum, item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.accum)
    }
}

impl<A: Debug, F> Debug for FoldSink<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldSink")
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
        fn concat(
            words in propvec("[a-z]{0,3}", ..=4),
        ) {
            concat_impl(words)?;
        }
    }

    fn concat_impl(words: Vec<String>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || words.iter().cloned(),
            consumer_factory: || {
                Fold::new(String::new(), |text: &mut String, word: &String| {
                    text.push_str(word);
                })
            },
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if output != Ok(iter.collect::<String>()) {
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
