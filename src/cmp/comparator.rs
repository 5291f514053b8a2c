use std::cmp::Ordering;

/// Comparator acting as an `FnMut(&T, &T) -> Ordering`
/// for internal implementation.
pub trait Comparator<T: ?Sized> {
    fn cmp(&mut self, a: &T, b: &T) -> Ordering;

    /// Whether nothing can ever compare below `item`.
    ///
    /// Minimum searches stop on such an item.
    #[inline]
    fn is_bottom(&mut self, _item: &T) -> bool {
        false
    }
}

/// The comparer of reductions created without one: [`PartialOrd`], where
/// values unordered with themselves (like `NaN`) sort below everything else
/// and equal to each other.
///
/// This makes a minimum propagate `NaN`, and a maximum ignore it unless
/// every value is `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialOrder;

impl PartialOrder {
    #[inline]
    fn is_unordered<T: PartialOrd + ?Sized>(value: &T) -> bool {
        value.partial_cmp(value).is_none()
    }
}

impl<T> Comparator<T> for PartialOrder
where
    T: PartialOrd + ?Sized,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        if let Some(ordering) = a.partial_cmp(b) {
            return ordering;
        }

        match (Self::is_unordered(a), Self::is_unordered(b)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    #[inline]
    fn is_bottom(&mut self, item: &T) -> bool {
        Self::is_unordered(item)
    }
}

impl<F, T> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
    T: ?Sized,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Key extraction acting as an `FnMut(&T) -> K`
/// for internal implementation.
pub trait KeyFn<T> {
    type Key;

    fn key(&mut self, item: &T) -> Self::Key;
}

/// The key of reductions created without a key function: a clone of the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Clone> KeyFn<T> for Identity {
    type Key = T;

    #[inline]
    fn key(&mut self, item: &T) -> T {
        item.clone()
    }
}

impl<F, T, K> KeyFn<T> for F
where
    F: FnMut(&T) -> K,
{
    type Key = K;

    #[inline]
    fn key(&mut self, item: &T) -> K {
        self(item)
    }
}
