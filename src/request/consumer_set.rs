use std::ops::ControlFlow;

use crate::{
    AggregateError, Failures,
    sink::{Consumer, Sink, Slot},
};

/// Appends a consumer to a tuple of consumers.
///
/// This is what [`Request::and()`](super::Request::and) is built on. It is
/// implemented for tuples of up to 15 elements, so a request holds at most 16
/// consumers.
pub trait Push<D> {
    /// The tuple with `D` appended.
    type Pushed;

    /// Appends `consumer`.
    fn push(self, consumer: D) -> Self::Pushed;
}

/// A tuple of consumers that can be run together over items of type `T`.
///
/// Implemented for `()` and for tuples of up to 16 [`Consumer`]s.
pub trait ConsumerSet<T> {
    /// The tuple of outputs, in the same order as the consumers.
    type Output;

    #[doc(hidden)]
    type Sinks: SinkSet<T, Output = Self::Output>;

    #[doc(hidden)]
    fn into_sinks(self) -> Self::Sinks;
}

/// The live sinks of a request, each in its own slot.
///
/// Every accept call reaches every still-active slot, in registration order,
/// even once one of them has stopped. The set only stops when all of them did.
#[doc(hidden)]
pub trait SinkSet<T> {
    type Output;

    fn break_hint(&self) -> ControlFlow<()>;

    fn accept_first(&mut self, item: &T) -> ControlFlow<()>;

    fn accept_next(&mut self, item: &T) -> ControlFlow<()>;

    /// Number of sinks still wanting items.
    fn active(&self) -> usize;

    fn finish(self) -> Result<Self::Output, AggregateError>;
}

/// Feeds one slot, reporting when it stops.
#[inline]
fn feed<S>(
    slot: &mut Slot<S>,
    position: usize,
    accept: impl FnOnce(&mut Slot<S>) -> ControlFlow<()>,
) -> ControlFlow<()> {
    if slot.state().is_break() {
        return ControlFlow::Break(());
    }

    let flow = accept(slot);

    #[cfg(feature = "tracing")]
    if flow.is_break() {
        tracing::trace!(position, "sink stopped");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = position;

    flow
}

impl<T> ConsumerSet<T> for () {
    type Output = ();
    type Sinks = ();

    #[inline]
    fn into_sinks(self) -> Self::Sinks {}
}

// Nothing to feed.
impl<T> SinkSet<T> for () {
    type Output = ();

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Break(())
    }

    #[inline]
    fn accept_first(&mut self, _item: &T) -> ControlFlow<()> {
        ControlFlow::Break(())
    }

    #[inline]
    fn accept_next(&mut self, _item: &T) -> ControlFlow<()> {
        ControlFlow::Break(())
    }

    #[inline]
    fn active(&self) -> usize {
        0
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, AggregateError> {
        Ok(())
    }
}

macro_rules! push_impl {
    ($($idx:tt $cons:ident)*) => {
        impl<$($cons,)* D> Push<D> for ($($cons,)*) {
            type Pushed = ($($cons,)* D,);

            #[inline]
            fn push(self, consumer: D) -> Self::Pushed {
                ($(self.$idx,)* consumer,)
            }
        }
    };
}

macro_rules! tuple_impl {
    ($($idx:tt $cons:ident $out:ident)+) => {
        impl<T, $($cons,)+> ConsumerSet<T> for ($($cons,)+)
        where
            $($cons: Consumer<T>,)+
        {
            type Output = ($($cons::Output,)+);
            type Sinks = ($(Slot<$cons::Sink>,)+);

            #[inline]
            fn into_sinks(self) -> Self::Sinks {
                ($(Slot::new::<T>(self.$idx.into_sink()),)+)
            }
        }

        impl<T, $($cons,)+> SinkSet<T> for ($(Slot<$cons>,)+)
        where
            $($cons: Sink<T>,)+
        {
            type Output = ($($cons::Output,)+);

            #[inline]
            fn break_hint(&self) -> ControlFlow<()> {
                if true $(&& self.$idx.state().is_break())+ {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }

            #[inline]
            fn accept_first(&mut self, item: &T) -> ControlFlow<()> {
                let mut flow = ControlFlow::Break(());
                // No short-circuit: every slot has to see the item.
                $(
                    if feed(&mut self.$idx, $idx, |slot| slot.accept_first(item)).is_continue() {
                        flow = ControlFlow::Continue(());
                    }
                )+
                flow
            }

            #[inline]
            fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
                let mut flow = ControlFlow::Break(());
                $(
                    if feed(&mut self.$idx, $idx, |slot| slot.accept_next(item)).is_continue() {
                        flow = ControlFlow::Continue(());
                    }
                )+
                flow
            }

            #[inline]
            fn active(&self) -> usize {
                0 $(+ usize::from(self.$idx.state().is_continue()))+
            }

            fn finish(self) -> Result<Self::Output, AggregateError> {
                let mut failures = Failures::default();
                // Statements run in order, so positions are recorded in registration order.
                $(let $out = failures.record($idx, self.$idx.finish::<T>());)+

                let outputs = match ($($out,)+) {
                    ($(Some($out),)+) => Some(($($out,)+)),
                    _ => None,
                };
                failures.into_result(outputs)
            }
        }
    };
}

#[rustfmt::skip]
push_impl!();
push_impl!(
    0 C0
);
push_impl!(
    0 C0
    1 C1
);
push_impl!(
    0 C0
    1 C1
    2 C2
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
    9 C9
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
    9 C9
    10 C10
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
    9 C9
    10 C10
    11 C11
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
    9 C9
    10 C10
    11 C11
    12 C12
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
    9 C9
    10 C10
    11 C11
    12 C12
    13 C13
);
push_impl!(
    0 C0
    1 C1
    2 C2
    3 C3
    4 C4
    5 C5
    6 C6
    7 C7
    8 C8
    9 C9
    10 C10
    11 C11
    12 C12
    13 C13
    14 C14
);

tuple_impl!(
    0 C0 out0
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
    10 C10 out10
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
    10 C10 out10
    11 C11 out11
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
    10 C10 out10
    11 C11 out11
    12 C12 out12
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
    10 C10 out10
    11 C11 out11
    12 C12 out12
    13 C13 out13
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
    10 C10 out10
    11 C11 out11
    12 C12 out12
    13 C13 out13
    14 C14 out14
);
tuple_impl!(
    0 C0 out0
    1 C1 out1
    2 C2 out2
    3 C3 out3
    4 C4 out4
    5 C5 out5
    6 C6 out6
    7 C7 out7
    8 C8 out8
    9 C9 out9
    10 C10 out10
    11 C11 out11
    12 C12 out12
    13 C13 out13
    14 C14 out14
    15 C15 out15
);
