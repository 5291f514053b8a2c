use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Comparator, KeyFn, PartialOrder};

/// A consumer that computes the item whose key is the greatest.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// The key of every item is computed exactly once. If several items have
/// the greatest key, the first one is kept.
/// If there are no items, it fails with [`SinkError::Empty`].
///
/// This consumer is constructed by [`Max::by_key()`](super::Max::by_key)
/// and [`Max::by_key_with()`](super::Max::by_key_with).
///
/// This consumer corresponds to [`Iterator::max_by_key()`], except for ties.
#[derive(Debug, Clone)]
pub struct MaxByKey<F, C = PartialOrder> {
    f: F,
    cmp: C,
}

impl<F, C> MaxByKey<F, C> {
    #[inline]
    pub(super) const fn new(f: F, cmp: C) -> Self {
        Self { f, cmp }
    }
}

impl<F, C> ConsumerBase for MaxByKey<F, C> {}

impl<T, F, C> Consumer<T> for MaxByKey<F, C>
where
    T: Clone,
    F: KeyFn<T>,
    C: Comparator<F::Key>,
{
    type Output = T;
    type Sink = MaxByKeySink<T, F::Key, F, C>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MaxByKeySink {
            max: None,
            f: self.f,
            cmp: self.cmp,
        }
    }
}

/// The [`Sink`] of [`MaxByKey`].
#[derive(Clone)]
pub struct MaxByKeySink<T, K, F, C> {
    max: Option<(T, K)>,
    f: F,
    cmp: C,
}

impl<T, K, F, C> Sink<T> for MaxByKeySink<T, K, F, C>
where
    T: Clone,
    F: KeyFn<T, Key = K>,
    C: Comparator<K>,
{
    type Output = T;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.max = Some((item.clone(), self.f.key(item)));
        ControlFlow::Continue(())
    }

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        let key = self.f.key(item);

        match self.max {
            Some((ref mut max, ref mut max_key)) => {
                if self.cmp.cmp(&key, max_key) == Ordering::Greater {
                    max.clone_from(item);
                    *max_key = key;
                }
            }
            None => self.max = Some((item.clone(), key)),
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.max.map(|(max, _)| max).ok_or(SinkError::Empty)
    }
}

impl<T: Debug, K: Debug, F, C> Debug for MaxByKeySink<T, K, F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxByKeySink")
            .field("max", &self.max)
            .finish()
    }
}
