use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    ring::Ring,
    sink::{Consumer, ConsumerBase, Sink},
    slice::Index,
};

use super::Or;

/// A consumer that takes the item at an [`Index`].
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// - With [`Index::Start(n)`](Index::Start), it stops right after the item at `n`.
/// - With [`Index::End(n)`](Index::End), it keeps the last `n` items at most
///   and decides once the sequence is over. `End(1)` is the last item.
///   `End(0)` is never in range, so it doesn't consume anything.
///
/// If the sequence is too short, it fails with [`SinkError::IndexOutOfRange`].
///
/// This consumer corresponds to [`Iterator::nth()`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, Index, SinkError, iter::ElementAt};
///
/// let (third, second_to_last) = "abcdef"
///     .chars()
///     .request(ElementAt::new(2))
///     .and(ElementAt::new(Index::End(2)))
///     .finalize()
///     .unwrap();
///
/// assert_eq!((third, second_to_last), ('c', 'e'));
///
/// assert_eq!(
///     [1, 2].feed_into(ElementAt::new(Index::End(3))),
///     Err(SinkError::IndexOutOfRange { index: Index::End(3) }),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementAt {
    index: Index,
}

impl ElementAt {
    /// Creates a consumer taking the item at `index`.
    ///
    /// A plain `usize` counts from the start.
    #[inline]
    pub fn new(index: impl Into<Index>) -> Self {
        Self {
            index: index.into(),
        }
    }

    /// Returns the requested index.
    #[inline]
    pub const fn index(&self) -> Index {
        self.index
    }

    /// Makes the consumer output `fallback` if the index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, Index, iter::ElementAt};
    ///
    /// let at = ElementAt::new(Index::End(10)).or(0);
    /// assert_eq!((1..=5).feed_into(at), Ok(0));
    /// ```
    #[inline]
    pub const fn or<O>(self, fallback: O) -> Or<Self, O> {
        Or::new(self, fallback)
    }

    /// Makes the consumer output [`O::default()`](Default::default) if the index
    /// is out of range.
    #[inline]
    pub fn or_default<O: Default>(self) -> Or<Self, O> {
        Or::new(self, O::default())
    }
}

impl ConsumerBase for ElementAt {}

impl<T: Clone> Consumer<T> for ElementAt {
    type Output = T;
    type Sink = ElementAtSink<T>;

    fn into_sink(self) -> Self::Sink {
        let state = match self.index {
            Index::Start(target) => State::FromStart {
                position: 0,
                target,
                found: None,
            },
            Index::End(0) => State::PastEnd,
            Index::End(offset) => State::FromEnd {
                window: Ring::new(offset),
            },
        };

        ElementAtSink {
            index: self.index,
            state,
        }
    }
}

/// The [`Sink`] of [`ElementAt`].
#[derive(Clone)]
pub struct ElementAtSink<T> {
    index: Index,
    state: State<T>,
}

#[derive(Clone)]
enum State<T> {
    FromStart {
        position: usize,
        target: usize,
        found: Option<T>,
    },
    // Full once `offset` items are seen. The oldest is then the wanted one.
    FromEnd {
        window: Ring<T>,
    },
    PastEnd,
}

impl<T: Clone> Sink<T> for ElementAtSink<T> {
    type Output = T;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        match self.state {
            State::FromStart {
                ref mut position,
                target,
                ref mut found,
            } => {
                if *position == target {
                    *found = Some(item.clone());
                    return ControlFlow::Break(());
                }
                *position += 1;
            }
            State::FromEnd { ref mut window } => {
                window.push(item.clone());
            }
            State::PastEnd => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if matches!(self.state, State::PastEnd) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(self) -> Result<Self::Output, SinkError> {
        let found = match self.state {
            State::FromStart { found, .. } => found,
            State::FromEnd { window } if window.is_full() => window.into_oldest(),
            State::FromEnd { .. } | State::PastEnd => None,
        };

        found.ok_or(SinkError::IndexOutOfRange { index: self.index })
    }
}

impl<T> Debug for ElementAtSink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementAtSink")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
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
        fn from_start(
            nums in propvec(any::<i32>(), ..=6),
            index in ..8_usize,
        ) {
            from_start_impl(nums, index)?;
        }

        #[test]
        fn from_end(
            nums in propvec(any::<i32>(), ..=6),
            offset in ..8_usize,
        ) {
            from_end_impl(nums, offset)?;
        }
    }

    fn from_start_impl(nums: Vec<i32>, index: usize) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || ElementAt::new(index),
            should_break_pred: |mut iter| iter.nth(index).is_some(),
            pred: |mut iter, output, remaining| {
                let expected = iter.nth(index).ok_or(SinkError::IndexOutOfRange {
                    index: Index::Start(index),
                });

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

    fn from_end_impl(nums: Vec<i32>, offset: usize) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || ElementAt::new(Index::End(offset)),
            should_break_pred: |_| offset == 0,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.collect();
                let expected = offset
                    .checked_sub(1)
                    .and_then(|back| items.iter().rev().nth(back).copied())
                    .ok_or(SinkError::IndexOutOfRange {
                        index: Index::End(offset),
                    });

                if output != expected {
                    Err(PredError::IncorrectOutput)
                } else if offset > 0 && remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else if offset == 0 && !remaining.eq(items) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_sink()
    }

    #[test]
    fn past_end_pulls_nothing() {
        let mut pulled = 0;
        let source = (0..10).inspect(|_| pulled += 1);

        assert_eq!(
            source.feed_into(ElementAt::new(Index::End(0)).or(-1)),
            Ok(-1)
        );
        assert_eq!(pulled, 0);
    }
}
