use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use itertools::MinMaxResult;

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Comparator, PartialOrder};

/// A consumer that computes the minimum and the maximum items at once.
///
/// Its [`Output`](Consumer::Output) is:
///
/// - [`MinMaxResult::NoElements`] if there are no items.
/// - [`MinMaxResult::OneElement`] containing a clone of the only item.
/// - [`MinMaxResult::MinMax`] containing clones of the minimum and the maximum
///   items (in order) if there are two or more items.
///
///   If several items are minimal, the first one is kept.
///   If several items are maximal, the last one is kept.
///
/// It never fails.
///
/// This consumer corresponds to [`Itertools::minmax()`](itertools::Itertools::minmax).
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, cmp::MinMax};
/// use itertools::MinMaxResult;
///
/// assert_eq!(
///     std::iter::empty::<i32>().feed_into(MinMax::new()),
///     Ok(MinMaxResult::NoElements),
/// );
/// assert_eq!([1].feed_into(MinMax::new()), Ok(MinMaxResult::OneElement(1)));
/// assert_eq!([1, 3, 2].feed_into(MinMax::new()), Ok(MinMaxResult::MinMax(1, 3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinMax<C = PartialOrder> {
    cmp: C,
}

impl MinMax {
    /// Creates a consumer computing both extrema with [`PartialOrd`].
    #[inline]
    pub const fn new() -> Self {
        Self { cmp: PartialOrder }
    }
}

impl<C> MinMax<C> {
    /// Creates a consumer computing both extrema with a comparer.
    ///
    /// This corresponds to [`Itertools::minmax_by()`](itertools::Itertools::minmax_by).
    #[inline]
    pub const fn by(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<C> ConsumerBase for MinMax<C> {}

impl<T, C> Consumer<T> for MinMax<C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Output = MinMaxResult<T>;
    type Sink = MinMaxSink<T, C>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MinMaxSink {
            state: MinMaxResult::NoElements,
            cmp: self.cmp,
        }
    }
}

/// The [`Sink`] of [`MinMax`].
#[derive(Clone)]
pub struct MinMaxSink<T, C> {
    state: MinMaxResult<T>,
    cmp: C,
}

impl<T, C> Sink<T> for MinMaxSink<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    type Output = MinMaxResult<T>;

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        match self.state {
            MinMaxResult::NoElements => self.state = MinMaxResult::OneElement(item.clone()),
            MinMaxResult::OneElement(ref only) => {
                self.state = if self.cmp.cmp(item, only) == Ordering::Less {
                    MinMaxResult::MinMax(item.clone(), only.clone())
                } else {
                    MinMaxResult::MinMax(only.clone(), item.clone())
                };
            }
            MinMaxResult::MinMax(ref mut min, ref mut max) => {
                if self.cmp.cmp(item, min) == Ordering::Less {
                    min.clone_from(item);
                } else if self.cmp.cmp(item, max) != Ordering::Less {
                    max.clone_from(item);
                }
            }
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.state)
    }
}

impl<T: Debug, C> Debug for MinMaxSink<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinMaxSink")
            .field("state", &self.state)
            .finish()
    }
}
