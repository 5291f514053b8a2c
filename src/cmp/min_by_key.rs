use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Comparator, KeyFn, PartialOrder};

/// A consumer that computes the item whose key is the least.
/// Its [`Output`](Consumer::Output) is a clone of that item.
///
/// The key of every item is computed exactly once. If several items have
/// the least key, the first one is kept. Like [`Min`](super::Min), it stops
/// on the first key that nothing can compare below (a `NaN` key by default).
/// If there are no items, it fails with [`SinkError::Empty`].
///
/// This consumer is constructed by [`Min::by_key()`](super::Min::by_key)
/// and [`Min::by_key_with()`](super::Min::by_key_with).
///
/// This consumer corresponds to [`Iterator::min_by_key()`].
#[derive(Debug, Clone)]
pub struct MinByKey<F, C = PartialOrder> {
    f: F,
    cmp: C,
}

impl<F, C> MinByKey<F, C> {
    #[inline]
    pub(super) const fn new(f: F, cmp: C) -> Self {
        Self { f, cmp }
    }
}

impl<F, C> ConsumerBase for MinByKey<F, C> {}

impl<T, F, C> Consumer<T> for MinByKey<F, C>
where
    T: Clone,
    F: KeyFn<T>,
    C: Comparator<F::Key>,
{
    type Output = T;
    type Sink = MinByKeySink<T, F::Key, F, C>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        MinByKeySink {
            min: None,
            f: self.f,
            cmp: self.cmp,
        }
    }
}

/// The [`Sink`] of [`MinByKey`].
#[derive(Clone)]
pub struct MinByKeySink<T, K, F, C> {
    min: Option<(T, K)>,
    f: F,
    cmp: C,
}

impl<T, K, F, C> Sink<T> for MinByKeySink<T, K, F, C>
where
    T: Clone,
    F: KeyFn<T, Key = K>,
    C: Comparator<K>,
{
    type Output = T;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        let key = self.f.key(item);
        let bottom = self.cmp.is_bottom(&key);
        self.min = Some((item.clone(), key));

        if bottom {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        let key = self.f.key(item);

        let Some((ref mut min, ref mut min_key)) = self.min else {
            return self.accept_first(item);
        };

        if self.cmp.cmp(&key, min_key) != Ordering::Less {
            return ControlFlow::Continue(());
        }

        let bottom = self.cmp.is_bottom(&key);
        min.clone_from(item);
        *min_key = key;

        if bottom {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.min.map(|(min, _)| min).ok_or(SinkError::Empty)
    }
}

impl<T: Debug, K: Debug, F, C> Debug for MinByKeySink<T, K, F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinByKeySink")
            .field("min", &self.min)
            .finish()
    }
}
