use std::ops::ControlFlow;

use crate::SinkError;

/// The per-run state of one reduction.
///
/// A sink is fed the items of a sequence one at a time, by shared reference,
/// and reports after each item whether it still wants more:
///
/// - [`accept_first()`](Sink::accept_first) for the very first item of the sequence,
/// - [`accept_next()`](Sink::accept_next) for every item after that,
/// - [`finish()`](Sink::finish) once the sequence is exhausted or the sink
///   has asked to stop.
///
/// If the sequence is empty, no accept method is called at all, and
/// [`finish()`](Sink::finish) must still produce a sensible "empty" outcome
/// (either a value or a [`SinkError`]).
///
/// Releasing a sink is dropping it. Resources a sink owns (a second sequence
/// to compare against, an index sequence...) are released by its [`Drop`],
/// which runs on every exit path of a pass, including unwinding.
///
/// See the [module-level documentation](crate::sink) for the rules about
/// calling a sink after it has stopped.
pub trait Sink<T> {
    /// The result of the reduction.
    type Output;

    /// Accepts the first item of the sequence.
    ///
    /// Returns [`Continue(())`] if the sink wants more items, or [`Break(())`]
    /// if it will not accept any more, in which case its output is fixed.
    ///
    /// The default implementation forwards to [`accept_next()`](Sink::accept_next).
    /// Override it when the first item needs to set up state, e.g. to avoid
    /// comparing the first item against a placeholder.
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
        self.accept_next(item)
    }

    /// Accepts an item other than the first one.
    ///
    /// Returns [`Continue(())`] if the sink wants more items, or [`Break(())`]
    /// if it will not accept any more, in which case its output is fixed.
    ///
    /// Implementors should signal a stop as early as possible,
    /// ideally right on the item that fixes the output.
    ///
    /// # Examples
    ///
    /// ```
    /// use onepass::{prelude::*, iter::Contains};
    ///
    /// let mut sink = Consumer::<i32>::into_sink(Contains::new(3));
    ///
    /// assert!(sink.accept_first(&1).is_continue());
    /// assert!(sink.accept_next(&2).is_continue());
    /// // Found it. Nothing else can change the answer.
    /// assert!(sink.accept_next(&3).is_break());
    ///
    /// assert_eq!(Sink::<i32>::finish(sink), Ok(true));
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn accept_next(&mut self, item: &T) -> ControlFlow<()>;

    /// Returns whether the sink already wants no items at all.
    ///
    /// The driver calls this once, right after building the sink and before
    /// feeding anything. Sinks whose output is decided by their parameters alone
    /// (an empty slice, an index past the end) return [`Break(())`](ControlFlow::Break)
    /// so that the source is not pulled on their behalf.
    ///
    /// The default implementation returns [`Continue(())`](ControlFlow::Continue).
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Consumes the sink and returns the result of the reduction.
    ///
    /// This is the only place where a reduction may fail.
    fn finish(self) -> Result<Self::Output, SinkError>;
}
