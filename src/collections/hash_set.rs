use std::{collections::HashSet, fmt::Debug, hash::Hash, ops::ControlFlow};

use crate::{
    SinkError,
    cmp::{Identity, KeyFn},
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that collects clones of the items into a [`HashSet`].
///
/// This consumer corresponds to `Iterator::collect::<HashSet<_>>()`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use onepass::{prelude::*, collections::ToSet};
///
/// let distinct = [3, 1, 3, 2].feed_into(ToSet::new());
/// assert_eq!(distinct, Ok(HashSet::from([1, 2, 3])));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ToSet;

impl ToSet {
    /// Creates a consumer collecting into a [`HashSet`].
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl ConsumerBase for ToSet {}

impl<T> Consumer<T> for ToSet
where
    T: Clone + Eq + Hash,
{
    type Output = HashSet<T>;
    type Sink = ToSetSink<T>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ToSetSink {
            set: HashSet::new(),
        }
    }
}

/// The [`Sink`] of [`ToSet`].
#[derive(Debug, Clone)]
pub struct ToSetSink<T> {
    set: HashSet<T>,
}

impl<T> Sink<T> for ToSetSink<T>
where
    T: Clone + Eq + Hash,
{
    type Output = HashSet<T>;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if !self.set.contains(item) {
            self.set.insert(item.clone());
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.set)
    }
}

/// A consumer that determines whether two items share a key
/// (by default, whether two items are equal).
/// Its [`Output`](Consumer::Output) is a `bool`.
///
/// Keys are kept in a [`HashSet`] until the first duplicate shows up.
/// Then the set is dropped and the sink stops.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, collections::HasDuplicates};
///
/// assert_eq!([1, 2, 2, 4].feed_into(HasDuplicates::new()), Ok(true));
/// assert_eq!([1, 2, 3, 4].feed_into(HasDuplicates::new()), Ok(false));
///
/// let same_initial = ["apple", "kiwi", "avocado"]
///     .feed_into(HasDuplicates::by_key(|word: &&str| word.chars().next()));
/// assert_eq!(same_initial, Ok(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HasDuplicates<F = Identity> {
    f: F,
}

impl HasDuplicates {
    /// Creates a consumer looking for two equal items.
    #[inline]
    pub const fn new() -> Self {
        Self { f: Identity }
    }
}

impl<F> HasDuplicates<F> {
    /// Creates a consumer looking for two items with the same key.
    ///
    /// The key of every item is computed exactly once.
    #[inline]
    pub const fn by_key(f: F) -> Self {
        Self { f }
    }
}

impl<F> ConsumerBase for HasDuplicates<F> {}

impl<T, F> Consumer<T> for HasDuplicates<F>
where
    F: KeyFn<T>,
    F::Key: Eq + Hash,
{
    type Output = bool;
    type Sink = HasDuplicatesSink<F::Key, F>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        HasDuplicatesSink {
            seen: Some(HashSet::new()),
            f: self.f,
        }
    }
}

/// The [`Sink`] of [`HasDuplicates`].
#[derive(Clone)]
pub struct HasDuplicatesSink<K, F> {
    // `None` once a duplicate was found.
    seen: Option<HashSet<K>>,
    f: F,
}

impl<T, K, F> Sink<T> for HasDuplicatesSink<K, F>
where
    F: KeyFn<T, Key = K>,
    K: Eq + Hash,
{
    type Output = bool;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        let Some(ref mut seen) = self.seen else {
            return ControlFlow::Break(());
        };

        if seen.insert(self.f.key(item)) {
            ControlFlow::Continue(())
        } else {
            self.seen = None;
            ControlFlow::Break(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.seen.is_none())
    }
}

impl<K: Debug, F> Debug for HasDuplicatesSink<K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HasDuplicatesSink")
            .field("seen", &self.seen)
            .finish()
    }
}
