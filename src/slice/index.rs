use std::fmt;

/// A position in a sequence, counted from its start or from its end.
///
/// `End(n)` is `n` items before the end: `End(1)` is the last item and
/// `End(0)` is one past it. As a range bound, `End(0)` therefore means
/// "up to the end".
///
/// It is displayed as `n` or `^n`.
///
/// # Examples
///
/// ```
/// use onepass::Index;
///
/// assert_eq!(Index::from(3), Index::Start(3));
/// assert_eq!(Index::End(1).to_string(), "^1");
/// assert_eq!(Index::End(2).resolve(5), Some(3));
/// assert_eq!(Index::End(6).resolve(5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// Counted from the start, the first item being `Start(0)`.
    Start(usize),
    /// Counted from the end, the last item being `End(1)`.
    End(usize),
}

impl Index {
    /// Resolves this index against a sequence of `len` items,
    /// returning the position counted from the start.
    ///
    /// Returns `None` if an index from the end lies before the start.
    /// An index from the start is returned as-is, even past `len`.
    #[inline]
    pub const fn resolve(self, len: usize) -> Option<usize> {
        match self {
            Index::Start(index) => Some(index),
            Index::End(offset) => len.checked_sub(offset),
        }
    }

    /// Returns `true` if this index is counted from the end.
    #[inline]
    pub const fn is_from_end(self) -> bool {
        matches!(self, Index::End(_))
    }
}

impl Default for Index {
    #[inline]
    fn default() -> Self {
        Index::Start(0)
    }
}

impl From<usize> for Index {
    #[inline]
    fn from(index: usize) -> Self {
        Index::Start(index)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Start(index) => write!(f, "{index}"),
            Index::End(offset) => write!(f, "^{offset}"),
        }
    }
}
