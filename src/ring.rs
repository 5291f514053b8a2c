//! A fixed-capacity circular buffer keeping the most recent items.

use alloc::vec::Vec;

/// Keeps at most `capacity` items, overwriting the oldest one once full.
///
/// Items are stored in a plain `Vec`. Until the buffer is full they are in
/// arrival order. After that, `next` marks both the slot to overwrite and the
/// oldest item, so the buffer is arrival order rotated left by `next`.
#[derive(Debug, Clone)]
pub(crate) struct Ring<T> {
    buf: Vec<T>,
    capacity: usize,
    next: usize,
}

impl<T> Ring<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            capacity,
            next: 0,
        }
    }

    /// Pushes an item, returning the item it evicts (if the buffer was full).
    ///
    /// With a capacity of 0, the pushed item is evicted right away.
    pub(crate) fn push(&mut self, item: T) -> Option<T> {
        if self.buf.len() < self.capacity {
            // Grow lazily so that huge from-end offsets over short
            // sequences don't allocate up front.
            self.buf.push(item);
            None
        } else if self.capacity == 0 {
            Some(item)
        } else {
            let evicted = std::mem::replace(&mut self.buf[self.next], item);
            self.next = (self.next + 1) % self.capacity;
            Some(evicted)
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Takes the oldest item out, dropping the rest.
    pub(crate) fn into_oldest(mut self) -> Option<T> {
        if self.buf.is_empty() {
            None
        } else {
            Some(self.buf.swap_remove(self.next))
        }
    }

    /// Unwraps the buffer into arrival order, oldest first.
    pub(crate) fn into_vec(self) -> Vec<T> {
        let mut buf = self.buf;
        // `next` stays 0 until the buffer is full, so a partial buffer is left untouched.
        buf.rotate_left(self.next);
        buf
    }
}
