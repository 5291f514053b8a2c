use crate::AggregateError;

use super::SinkSet;

/// Runs one pass of `source` through `sinks`.
///
/// Returns the source's first error as the outer `Err`, in which case no
/// sink is finished. Otherwise the source is dropped, then every sink is
/// finished in registration order.
///
/// Sinks and source are dropped on every path, unwinding included, since
/// both are owned by this frame.
pub(super) fn drive<I, T, E, S>(
    mut source: I,
    mut sinks: S,
) -> Result<Result<S::Output, AggregateError>, E>
where
    I: Iterator<Item = Result<T, E>>,
    S: SinkSet<T>,
{
    #[cfg(feature = "tracing")]
    let (mut pulled, mut exhausted) = (0_usize, false);

    if sinks.break_hint().is_continue() {
        let mut first = true;

        loop {
            let Some(item) = source.next() else {
                #[cfg(feature = "tracing")]
                {
                    exhausted = true;
                }
                break;
            };
            let item = item?;

            #[cfg(feature = "tracing")]
            {
                pulled += 1;
            }

            let flow = if first {
                first = false;
                sinks.accept_first(&item)
            } else {
                sinks.accept_next(&item)
            };

            if flow.is_break() {
                break;
            }
        }
    }

    drop(source);

    #[cfg(feature = "tracing")]
    tracing::debug!(pulled, exhausted, active = sinks.active(), "pass ended");

    Ok(sinks.finish())
}
