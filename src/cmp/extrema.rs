use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use alloc::vec::Vec;

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::{Comparator, Identity, KeyFn, PartialOrder};

macro_rules! extrema_consumer {
    (
        $(#[$meta:meta])*
        $name:ident, $best:ident, $word:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name<F = Identity, C = PartialOrder> {
            f: F,
            cmp: C,
        }

        impl $name {
            #[doc = concat!("Creates a consumer collecting every ", $word, " item, compared with [`PartialOrd`].")]
            #[inline]
            pub const fn new() -> Self {
                Self {
                    f: Identity,
                    cmp: PartialOrder,
                }
            }
        }

        impl<C> $name<Identity, C> {
            #[doc = concat!("Creates a consumer collecting every ", $word, " item, compared with `cmp`.")]
            #[inline]
            pub const fn by(cmp: C) -> Self {
                Self { f: Identity, cmp }
            }
        }

        impl<F> $name<F> {
            #[doc = concat!("Creates a consumer collecting every item whose key is the ", $word, ",")]
            /// keys being compared with [`PartialOrd`].
            ///
            /// The key of every item is computed exactly once.
            #[inline]
            pub const fn by_key(f: F) -> Self {
                Self {
                    f,
                    cmp: PartialOrder,
                }
            }
        }

        impl<F, C> $name<F, C> {
            #[doc = concat!("Creates a consumer collecting every item whose key is the ", $word, ",")]
            /// keys being compared with `cmp`.
            #[inline]
            pub const fn by_key_with(f: F, cmp: C) -> Self {
                Self { f, cmp }
            }
        }

        impl<F, C> ConsumerBase for $name<F, C> {}

        impl<T, F, C> Consumer<T> for $name<F, C>
        where
            T: Clone,
            F: KeyFn<T>,
            C: Comparator<F::Key>,
        {
            type Output = Vec<T>;
            type Sink = ExtremaSink<T, F::Key, F, C>;

            #[inline]
            fn into_sink(self) -> Self::Sink {
                ExtremaSink {
                    key: None,
                    items: Vec::new(),
                    f: self.f,
                    cmp: self.cmp,
                    better: Ordering::$best,
                }
            }
        }
    };
}

extrema_consumer! {
    /// A consumer that collects every maximal item.
    /// Its [`Output`](Consumer::Output) is a [`Vec`] of clones of those items,
    /// in the order they came.
    ///
    /// Items (or their keys) are compared with [`PartialOrd`] by default,
    /// `NaN` sorting below everything else. There are no maximal items in an
    /// empty sequence, so this consumer never fails.
    ///
    /// This consumer corresponds to [`Itertools::max_set()`] and its `_by`
    /// and `_by_key` variants.
    ///
    /// [`Itertools::max_set()`]: https://docs.rs/itertools/latest/itertools/trait.Itertools.html#method.max_set
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, cmp::Maxima};
    ///
    /// let oldest = [("ann", 45), ("bob", 31), ("cid", 45)]
    ///     .feed_into(Maxima::by_key(|&(_, age): &(&str, u32)| age));
    /// assert_eq!(oldest, Ok(vec![("ann", 45), ("cid", 45)]));
    ///
    /// assert_eq!(std::iter::empty::<i32>().feed_into(Maxima::new()), Ok(vec![]));
    /// ```
    Maxima, Greater, "greatest"
}

extrema_consumer! {
    /// A consumer that collects every minimal item.
    /// Its [`Output`](Consumer::Output) is a [`Vec`] of clones of those items,
    /// in the order they came.
    ///
    /// Items (or their keys) are compared with [`PartialOrd`] by default,
    /// `NaN` sorting below everything else. Unlike [`Min`](super::Min), it
    /// can't stop on a `NaN`: a later `NaN` is just as minimal.
    /// There are no minimal items in an empty sequence, so this consumer
    /// never fails.
    ///
    /// This consumer corresponds to [`Itertools::min_set()`] and its `_by`
    /// and `_by_key` variants.
    ///
    /// [`Itertools::min_set()`]: https://docs.rs/itertools/latest/itertools/trait.Itertools.html#method.min_set
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, cmp::Minima};
    ///
    /// assert_eq!([2, 1, 3, 1].feed_into(Minima::new()), Ok(vec![1, 1]));
    /// ```
    Minima, Less, "least"
}

/// The [`Sink`] of [`Maxima`] and [`Minima`].
#[derive(Clone)]
pub struct ExtremaSink<T, K, F, C> {
    key: Option<K>,
    items: Vec<T>,
    f: F,
    cmp: C,
    // What a new key compares as to the current one when it wins.
    better: Ordering,
}

impl<T, K, F, C> Sink<T> for ExtremaSink<T, K, F, C>
where
    T: Clone,
    F: KeyFn<T, Key = K>,
    C: Comparator<K>,
{
    type Output = Vec<T>;

    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.key = Some(self.f.key(item));
        self.items.push(item.clone());
        ControlFlow::Continue(())
    }

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        let key = self.f.key(item);

        let Some(ref mut best) = self.key else {
            self.key = Some(key);
            self.items.push(item.clone());
            return ControlFlow::Continue(());
        };

        match self.cmp.cmp(&key, best) {
            Ordering::Equal => self.items.push(item.clone()),
            ordering if ordering == self.better => {
                *best = key;
                self.items.clear();
                self.items.push(item.clone());
            }
            _ => {}
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.items)
    }
}

impl<T: Debug, K: Debug, F, C> Debug for ExtremaSink<T, K, F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtremaSink")
            .field("key", &self.key)
            .field("items", &self.items)
            .finish()
    }
}
