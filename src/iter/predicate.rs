use crate::SinkError;

/// Predicate acting as an `FnMut(&T) -> bool`
/// for internal implementation.
///
/// It also tells which failure a "find one" reduction reports: reductions
/// without a predicate talk about elements, the others about matches.
pub trait Predicate<T> {
    fn test(&mut self, item: &T) -> bool;

    fn none_error() -> SinkError {
        SinkError::NoMatch
    }

    fn many_error() -> SinkError {
        SinkError::MoreThanOneMatch
    }
}

/// The predicate of reductions created without one: every item matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<T> Predicate<T> for Always {
    #[inline]
    fn test(&mut self, _item: &T) -> bool {
        true
    }

    #[inline]
    fn none_error() -> SinkError {
        SinkError::Empty
    }

    #[inline]
    fn many_error() -> SinkError {
        SinkError::MoreThanOneElement
    }
}

impl<F, T> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Equality acting as an `FnMut(&T, &U) -> bool`
/// for internal implementation.
pub trait Equivalence<T, U: ?Sized> {
    fn eq(&mut self, a: &T, b: &U) -> bool;
}

/// The equality of reductions created without an explicit one: [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEq;

impl<T, U> Equivalence<T, U> for DefaultEq
where
    T: PartialEq<U>,
    U: ?Sized,
{
    #[inline]
    fn eq(&mut self, a: &T, b: &U) -> bool {
        a == b
    }
}

impl<F, T, U> Equivalence<T, U> for F
where
    F: FnMut(&T, &U) -> bool,
    U: ?Sized,
{
    #[inline]
    fn eq(&mut self, a: &T, b: &U) -> bool {
        self(a, b)
    }
}
