use std::{fmt::Debug, ops::ControlFlow, ops::Range};

use alloc::vec::Vec;

use crate::{
    SinkError,
    ring::Ring,
    sink::{Consumer, ConsumerBase, Sink},
};

use super::Index;

/// A consumer that extracts the items in the half-open range `start..end`.
/// Its [`Output`](Consumer::Output) is a [`Vec`] of clones of those items.
///
/// Either bound may be counted from the end of the sequence. The sink holds
/// at most as many items as the window can contain:
///
/// | `start`    | `end`      | buffered                            | stops early             |
/// |------------|------------|-------------------------------------|-------------------------|
/// | `Start(s)` | `Start(e)` | the output only                     | after item `e - 1`      |
/// | `Start(s)` | `End(k)`   | the output, plus the last `k` items | no                      |
/// | `End(s)`   | `Start(e)` | the last `s` items before `e`       | no                      |
/// | `End(s)`   | `End(k)`   | the last `s` items                  | no                      |
///
/// Ranges that are empty whatever the length of the sequence
/// (`Start(s)..Start(e)` with `s >= e`, `End(s)..End(k)` with `s <= k`,
/// `End(0)..` or `..Start(0)`) don't consume anything.
///
/// Bounds that fall outside the sequence are clamped to it, so this consumer never fails.
///
/// This consumer corresponds to slicing with a range.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, Index, slice::Slice};
///
/// assert_eq!((0..10).feed_into(Slice::from(2..4)), Ok(vec![2, 3]));
///
/// // The last three items but the very last one.
/// let slice = Slice::new(Index::End(3), Index::End(1));
/// assert_eq!((0..10).feed_into(slice), Ok(vec![7, 8]));
///
/// // The last five items, as long as they come before position 8.
/// let slice = Slice::new(Index::End(5), Index::Start(8));
/// assert_eq!((0..10).feed_into(slice), Ok(vec![5, 6, 7]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    start: Index,
    end: Index,
}

impl Slice {
    /// Creates a consumer extracting the items in `start..end`.
    #[inline]
    pub const fn new(start: Index, end: Index) -> Self {
        Self { start, end }
    }

    /// Creates a consumer extracting the first `n` items.
    ///
    /// This corresponds to [`Iterator::take()`].
    #[inline]
    pub const fn take(n: usize) -> Self {
        Self::new(Index::Start(0), Index::Start(n))
    }

    /// Creates a consumer extracting every item after the first `n`.
    ///
    /// This corresponds to [`Iterator::skip()`].
    #[inline]
    pub const fn skip(n: usize) -> Self {
        Self::new(Index::Start(n), Index::End(0))
    }

    /// Creates a consumer extracting the last `n` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, slice::Slice};
    ///
    /// assert_eq!((0..10).feed_into(Slice::take_last(3)), Ok(vec![7, 8, 9]));
    /// assert_eq!((0..2).feed_into(Slice::take_last(3)), Ok(vec![0, 1]));
    /// ```
    #[inline]
    pub const fn take_last(n: usize) -> Self {
        Self::new(Index::End(n), Index::End(0))
    }

    /// Creates a consumer extracting every item but the last `n`.
    #[inline]
    pub const fn skip_last(n: usize) -> Self {
        Self::new(Index::Start(0), Index::End(n))
    }

    /// Returns the start bound.
    #[inline]
    pub const fn start(&self) -> Index {
        self.start
    }

    /// Returns the end bound.
    #[inline]
    pub const fn end(&self) -> Index {
        self.end
    }
}

impl From<Range<usize>> for Slice {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(Index::Start(range.start), Index::Start(range.end))
    }
}

impl ConsumerBase for Slice {}

impl<T: Clone> Consumer<T> for Slice {
    type Output = Vec<T>;
    type Sink = SliceSink<T>;

    fn into_sink(self) -> Self::Sink {
        let shape = match (self.start, self.end) {
            (Index::Start(start), Index::Start(end)) if start < end => Shape::Prefix {
                position: 0,
                start,
                end,
                items: Vec::new(),
            },
            (Index::Start(start), Index::End(trailing)) => Shape::SkipTail {
                position: 0,
                start,
                items: Vec::new(),
                tail: Ring::new(trailing),
            },
            (Index::End(offset), Index::Start(end)) if offset > 0 && end > 0 => {
                Shape::HeadWindow {
                    position: 0,
                    offset,
                    end,
                    window: Ring::new(offset),
                }
            }
            (Index::End(window), Index::End(trailing)) if window > trailing => Shape::TailWindow {
                window: Ring::new(window),
                trailing,
            },
            _ => Shape::Empty,
        };

        SliceSink { shape }
    }
}

/// The [`Sink`] of [`Slice`].
#[derive(Clone)]
pub struct SliceSink<T> {
    shape: Shape<T>,
}

#[derive(Clone)]
enum Shape<T> {
    Empty,
    Prefix {
        position: usize,
        start: usize,
        end: usize,
        items: Vec<T>,
    },
    // Items leave the ring `trailing` items late, so the
    // last `trailing` items never make it into `items`.
    SkipTail {
        position: usize,
        start: usize,
        items: Vec<T>,
        tail: Ring<T>,
    },
    // Still counts the items past `end`: the window start depends on the full length.
    HeadWindow {
        position: usize,
        offset: usize,
        end: usize,
        window: Ring<T>,
    },
    TailWindow {
        window: Ring<T>,
        trailing: usize,
    },
}

impl<T: Clone> Sink<T> for SliceSink<T> {
    type Output = Vec<T>;

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        match self.shape {
            Shape::Empty => return ControlFlow::Break(()),
            Shape::Prefix {
                ref mut position,
                start,
                end,
                ref mut items,
            } => {
                if *position >= start {
                    items.push(item.clone());
                }

                *position += 1;
                if *position >= end {
                    return ControlFlow::Break(());
                }
            }
            Shape::SkipTail {
                ref mut position,
                start,
                ref mut items,
                ref mut tail,
            } => {
                if *position >= start {
                    items.extend(tail.push(item.clone()));
                } else {
                    *position += 1;
                }
            }
            Shape::HeadWindow {
                ref mut position,
                end,
                ref mut window,
                ..
            } => {
                if *position < end {
                    window.push(item.clone());
                }
                *position += 1;
            }
            Shape::TailWindow { ref mut window, .. } => {
                window.push(item.clone());
            }
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if matches!(self.shape, Shape::Empty) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(self) -> Result<Self::Output, SinkError> {
        let items = match self.shape {
            Shape::Empty => Vec::new(),
            Shape::Prefix { items, .. } | Shape::SkipTail { items, .. } => items,
            Shape::HeadWindow {
                position: len,
                offset,
                end,
                window,
            } => {
                // `window` holds the items right before `min(len, end)`.
                let first = len.min(end) - window.len();
                let start = len.saturating_sub(offset);
                let mut items = window.into_vec();
                items.drain(..start.saturating_sub(first).min(items.len()));
                items
            }
            Shape::TailWindow { window, trailing } => {
                let mut items = window.into_vec();
                items.truncate(items.len().saturating_sub(trailing));
                items
            }
        };

        Ok(items)
    }
}

impl<T: Debug> Debug for SliceSink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self.shape {
            Shape::Empty => "Empty",
            Shape::Prefix { .. } => "Prefix",
            Shape::SkipTail { .. } => "SkipTail",
            Shape::HeadWindow { .. } => "HeadWindow",
            Shape::TailWindow { .. } => "TailWindow",
        };

        f.debug_struct("SliceSink").field("shape", &shape).finish()
    }
}
