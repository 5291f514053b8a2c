use super::{Filter, Map, MapOutput, Sink};

/// An immutable description of one reduction, and the factory of its [`Sink`].
///
/// Consumers carry everything the reduction is parameterized by (predicates,
/// comparers, indices, literals). Arguments are checked when the consumer is
/// constructed, before any item is seen.
///
/// Consumers whose parameters are [`Clone`] are [`Clone`] too, so one
/// description can produce any number of independent sinks.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::Count};
///
/// let evens = Count::matching(|&x: &i32| x % 2 == 0);
///
/// assert_eq!([1, 2, 3, 4, 5].feed_into(evens.clone()), Ok(2));
/// assert_eq!([2, 4].feed_into(evens), Ok(2));
/// ```
pub trait Consumer<T> {
    /// The result of the reduction.
    type Output;

    /// The sink this consumer produces.
    type Sink: Sink<T, Output = Self::Output>;

    /// Builds a fresh sink for one pass.
    fn into_sink(self) -> Self::Sink;
}

/// Adaptors shared by every consumer in this crate.
///
/// This trait does not name the item type, so the adaptors can be chained
/// before the consumer is given to a request. Closures passed to them usually
/// need their parameter types spelled out.
pub trait ConsumerBase: Sized {
    /// Creates a consumer that feeds the inner one with `f(item)` instead of `item`.
    ///
    /// This is how reductions over a projection are expressed, e.g. the sum of
    /// a field.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, num::Sum};
    ///
    /// struct Order {
    ///     quantity: u32,
    /// }
    ///
    /// let orders = [Order { quantity: 3 }, Order { quantity: 4 }];
    ///
    /// let total = orders
    ///     .iter()
    ///     .feed_into(Sum::<u32>::new().map(|order: &&Order| order.quantity));
    ///
    /// assert_eq!(total, Ok(7));
    /// ```
    #[inline]
    fn map<F>(self, f: F) -> Map<Self, F> {
        Map::new(self, f)
    }

    /// Creates a consumer that only feeds the inner one with items satisfying `pred`.
    ///
    /// The inner sink sees its "first" item on the first item that passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, iter::First};
    ///
    /// let first_big = [1, 20, 3, 40]
    ///     .feed_into(First::new().filter(|&x: &i32| x > 10));
    ///
    /// assert_eq!(first_big, Ok(20));
    /// ```
    #[inline]
    fn filter<F>(self, pred: F) -> Filter<Self, F> {
        Filter::new(self, pred)
    }

    /// Creates a consumer that transforms the final output.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, iter::Count};
    ///
    /// let is_empty = std::iter::empty::<i32>()
    ///     .feed_into(Count::new().map_output(|count: usize| count == 0));
    ///
    /// assert_eq!(is_empty, Ok(true));
    /// ```
    #[inline]
    fn map_output<F>(self, f: F) -> MapOutput<Self, F> {
        MapOutput::new(self, f)
    }
}
