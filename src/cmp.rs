//! [`Consumer`]s comparing items.
//!
//! They find the greatest or least item, or the item with the greatest or
//! least key, and correspond to [`Iterator::max()`], [`Iterator::min_by()`],
//! [`Iterator::max_by_key()`] and friends.
//!
//! Unless given a comparer, they compare with [`PartialOrd`] where values
//! unordered with themselves (`NaN`) sort below everything else. See
//! [`PartialOrder`].
//!
//! [`Consumer`]: crate::Consumer

mod comparator;
mod extrema;
mod max;
mod max_by_key;
mod min;
mod min_by_key;
#[cfg(feature = "itertools")]
mod min_max;

pub(crate) use comparator::{Comparator, KeyFn};
pub use comparator::{Identity, PartialOrder};
pub use extrema::*;
pub use max::*;
pub use max_by_key::*;
pub use min::*;
pub use min_by_key::*;
#[cfg(feature = "itertools")]
#[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
pub use min_max::*;

#[cfg(test)]
#[allow(dead_code)]
mod test_utils {
    use std::cmp::Ordering;

    #[cfg(feature = "itertools")]
    use itertools::MinMaxResult;

    /// Compares on `num` only, so tests can tell which of several
    /// equal extrema was kept.
    #[derive(Debug, Clone, Copy, Eq)]
    pub struct Id {
        pub id: usize,
        pub num: i32,
    }

    impl Id {
        pub fn full_eq(self, other: Self) -> bool {
            self.id == other.id && self.num == other.num
        }

        pub fn full_eq_opt(x: Option<Self>, y: Option<Self>) -> bool {
            match (x, y) {
                (Some(x), Some(y)) => x.full_eq(y),
                (None, None) => true,
                _ => false,
            }
        }

        #[cfg(feature = "itertools")]
        pub fn full_eq_minmax_res(x: MinMaxResult<Self>, y: MinMaxResult<Self>) -> bool {
            match (x, y) {
                (MinMaxResult::NoElements, MinMaxResult::NoElements) => true,
                (MinMaxResult::OneElement(x), MinMaxResult::OneElement(y)) => x.full_eq(y),
                (MinMaxResult::MinMax(x_min, x_max), MinMaxResult::MinMax(y_min, y_max)) => {
                    x_min.full_eq(y_min) && x_max.full_eq(y_max)
                }
                _ => false,
            }
        }
    }

    impl PartialEq for Id {
        fn eq(&self, other: &Self) -> bool {
            self.num == other.num
        }
    }

    impl PartialOrd for Id {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Id {
        fn cmp(&self, other: &Self) -> Ordering {
            self.num.cmp(&other.num)
        }
    }
}
