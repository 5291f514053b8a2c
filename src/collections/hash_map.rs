use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
    ops::ControlFlow,
};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

/// A consumer that builds a [`HashMap`] with one entry per item.
/// Its [`Output`](Consumer::Output) is that map.
///
/// Keys and values are computed from each item by `key` and `value`.
/// Two items with the same key are a failure: the sink stops on the second one,
/// drops the map and fails with [`SinkError::DuplicateKey`].
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, SinkError, collections::ToMap};
///
/// let by_name = |&(name, _): &(&'static str, u32)| name;
/// let age = |&(_, age): &(&'static str, u32)| age;
///
/// let ages = [("ann", 31), ("bob", 45)].feed_into(ToMap::new(by_name, age));
/// assert_eq!(ages.unwrap()["bob"], 45);
///
/// let clash = [("ann", 31), ("ann", 45)].feed_into(ToMap::new(by_name, age));
/// assert_eq!(clash, Err(SinkError::DuplicateKey));
/// ```
#[derive(Debug, Clone)]
pub struct ToMap<KF, VF> {
    key: KF,
    value: VF,
}

impl<KF, VF> ToMap<KF, VF> {
    /// Creates a consumer mapping `key(item)` to `value(item)`.
    #[inline]
    pub const fn new(key: KF, value: VF) -> Self {
        Self { key, value }
    }
}

impl<KF, VF> ConsumerBase for ToMap<KF, VF> {}

impl<T, K, V, KF, VF> Consumer<T> for ToMap<KF, VF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    type Output = HashMap<K, V>;
    type Sink = ToMapSink<K, V, KF, VF>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ToMapSink {
            map: Some(HashMap::new()),
            key: self.key,
            value: self.value,
        }
    }
}

/// The [`Sink`] of [`ToMap`].
#[derive(Clone)]
pub struct ToMapSink<K, V, KF, VF> {
    // `None` once a key was repeated.
    map: Option<HashMap<K, V>>,
    key: KF,
    value: VF,
}

impl<T, K, V, KF, VF> Sink<T> for ToMapSink<K, V, KF, VF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    type Output = HashMap<K, V>;

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        let Some(ref mut map) = self.map else {
            return ControlFlow::Break(());
        };

        match map.entry((self.key)(item)) {
            Entry::Vacant(entry) => {
                entry.insert((self.value)(item));
                ControlFlow::Continue(())
            }
            Entry::Occupied(_) => {
                self.map = None;
                ControlFlow::Break(())
            }
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        self.map.ok_or(SinkError::DuplicateKey)
    }
}

impl<K: Debug, V: Debug, KF, VF> Debug for ToMapSink<K, V, KF, VF> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToMapSink").field("map", &self.map).finish()
    }
}

/// A consumer that groups items by key.
/// Its [`Output`](Consumer::Output) is a [`HashMap`] from every key to the
/// values of the items with that key, in the order the items came.
///
/// It never fails.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, collections::ToLookup};
///
/// let by_initial = ["apple", "kiwi", "avocado"].feed_into(ToLookup::new(
///     |word: &&str| word.chars().next(),
///     |word: &&str| word.len(),
/// ));
///
/// let by_initial = by_initial.unwrap();
/// assert_eq!(by_initial[&Some('a')], [5, 7]);
/// assert_eq!(by_initial[&Some('k')], [4]);
/// ```
#[derive(Debug, Clone)]
pub struct ToLookup<KF, VF> {
    key: KF,
    value: VF,
}

impl<KF, VF> ToLookup<KF, VF> {
    /// Creates a consumer grouping `value(item)` under `key(item)`.
    #[inline]
    pub const fn new(key: KF, value: VF) -> Self {
        Self { key, value }
    }
}

impl<KF, VF> ConsumerBase for ToLookup<KF, VF> {}

impl<T, K, V, KF, VF> Consumer<T> for ToLookup<KF, VF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    type Output = HashMap<K, Vec<V>>;
    type Sink = ToLookupSink<K, V, KF, VF>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ToLookupSink {
            groups: HashMap::new(),
            key: self.key,
            value: self.value,
        }
    }
}

/// The [`Sink`] of [`ToLookup`].
#[derive(Clone)]
pub struct ToLookupSink<K, V, KF, VF> {
    groups: HashMap<K, Vec<V>>,
    key: KF,
    value: VF,
}

impl<T, K, V, KF, VF> Sink<T> for ToLookupSink<K, V, KF, VF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    type Output = HashMap<K, Vec<V>>;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        self.groups
            .entry((self.key)(item))
            .or_default()
            .push((self.value)(item));

        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.groups)
    }
}

impl<K: Debug, V: Debug, KF, VF> Debug for ToLookupSink<K, V, KF, VF> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToLookupSink")
            .field("groups", &self.groups)
            .finish()
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::OnePass;
    use crate::test_utils::{BasicSinkTester, PredError, SinkTesterExt};

    use super::*;

    proptest! {
        #[test]
        fn to_map(
            nums in propvec(0..12_i32, ..=5),
        ) {
            to_map_impl(nums)?;
        }

        #[test]
        fn to_lookup(
            nums in propvec(0..12_i32, ..=6),
        ) {
            to_lookup_impl(nums)?;
        }
    }

    fn to_map_impl(nums: Vec<i32>) -> TestCaseResult {
        let key = |&num: &i32| num / 2;

        BasicSinkTester {
            iter_factory: || nums.iter().copied(),
            consumer_factory: || ToMap::new(key, |&num: &i32| num * 10),
            should_break_pred: |mut iter| {
                let mut keys = HashSet::new();
                iter.any(|num| !keys.insert(key(&num)))
            },
            pred: |mut iter, output, remaining| {
                let mut expected = HashMap::new();
                let clash = iter.by_ref().any(|num| expected.insert(key(&num), num * 10).is_some());

                let correct = if clash {
                    output == Err(SinkError::DuplicateKey)
                } else {
                    output == Ok(expected)
                };

                if !correct {
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

    fn to_lookup_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicSinkTester {
            iter_factory: || nums.iter().copied().enumerate(),
            consumer_factory: || {
                ToLookup::new(
                    |&(_, num): &(usize, i32)| num % 3,
                    |&(position, _): &(usize, i32)| position,
                )
            },
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let mut expected = HashMap::<i32, Vec<usize>>::new();
                for (position, num) in iter {
                    expected.entry(num % 3).or_default().push(position);
                }

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
    fn stops_on_duplicate_key() {
        let mut source = [1, 2, 1, 3].into_iter();
        let map = source
            .by_ref()
            .feed_into(ToMap::new(|&num: &i32| num, |&num: &i32| num));

        assert_eq!(map, Err(SinkError::DuplicateKey));
        assert_eq!(source.next(), Some(3));
    }
}
