use std::{fmt::Debug, ops::ControlFlow};

use alloc::vec::Vec;

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
    slice::Index,
};

/// A consumer that takes the items at several positions at once.
/// Its [`Output`](Consumer::Output) is a [`Vec`] with one clone per requested position.
///
/// The positions come from a sequence of their own, pulled lazily as the
/// items go by. They must be non-decreasing. A repeated position yields the
/// item as many times as it is repeated.
///
/// It stops once every position has been served. If the sequence ends with a
/// position left unserved, it fails with [`SinkError::IndexOutOfRange`].
///
/// # Panics
///
/// Panics as soon as a position smaller than the previous one is pulled.
///
/// # Examples
///
/// ```
/// use onepass::{prelude::*, iter::ElementsAt};
///
/// let picked = (10..).feed_into(ElementsAt::new([0, 2, 2, 5]));
/// assert_eq!(picked, Ok(vec![10, 12, 12, 15]));
///
/// // Every third item, up to position 9.
/// let picked = "abcdefghij".chars().feed_into(ElementsAt::new((0..10).step_by(3)));
/// assert_eq!(picked, Ok(vec!['a', 'd', 'g', 'j']));
/// ```
#[derive(Debug, Clone)]
pub struct ElementsAt<I> {
    indices: I,
}

impl<I> ElementsAt<I>
where
    I: IntoIterator<Item = usize>,
{
    /// Creates a consumer taking the items at `indices`.
    #[inline]
    pub const fn new(indices: I) -> Self {
        Self { indices }
    }
}

impl<I> ConsumerBase for ElementsAt<I> {}

impl<T, I> Consumer<T> for ElementsAt<I>
where
    T: Clone,
    I: IntoIterator<Item = usize>,
{
    type Output = Vec<T>;
    type Sink = ElementsAtSink<T, I::IntoIter>;

    fn into_sink(self) -> Self::Sink {
        let mut indices = self.indices.into_iter();

        ElementsAtSink {
            wanted: indices.next(),
            indices,
            position: 0,
            items: Vec::new(),
        }
    }
}

/// The [`Sink`] of [`ElementsAt`].
#[derive(Clone)]
pub struct ElementsAtSink<T, I> {
    // The next position to serve.
    wanted: Option<usize>,
    indices: I,
    position: usize,
    items: Vec<T>,
}

impl<T, I> ElementsAtSink<T, I>
where
    I: Iterator<Item = usize>,
{
    fn advance(&mut self, served: usize) {
        self.wanted = self.indices.next();

        if let Some(wanted) = self.wanted {
            assert!(
                wanted >= served,
                "requested positions must be non-decreasing, but {wanted} came after {served}"
            );
        }
    }
}

impl<T, I> Sink<T> for ElementsAtSink<T, I>
where
    T: Clone,
    I: Iterator<Item = usize>,
{
    type Output = Vec<T>;

    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        while self.wanted == Some(self.position) {
            self.items.push(item.clone());
            self.advance(self.position);
        }
        self.position += 1;

        if self.wanted.is_some() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.wanted.is_some() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    fn finish(self) -> Result<Self::Output, SinkError> {
        match self.wanted {
            Some(index) => Err(SinkError::IndexOutOfRange {
                index: Index::Start(index),
            }),
            None => Ok(self.items),
        }
    }
}

impl<T: Debug, I> Debug for ElementsAtSink<T, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementsAtSink")
            .field("wanted", &self.wanted)
            .field("position", &self.position)
            .field("items", &self.items)
            .finish()
    }
}
