//! [`Consumer`]s pushing items into a [`std::sync::mpsc`] channel.
//!
//! This module corresponds to [`std::sync::mpsc`].
//!
//! [`Consumer`]: crate::Consumer

use std::{
    fmt::Debug,
    ops::ControlFlow,
    sync::mpsc::{Sender, SyncSender},
};

use crate::{
    SinkError,
    sink::{Consumer, ConsumerBase, Sink},
};

mod private {
    use std::sync::mpsc::{Sender, SyncSender};

    /// The sending half of a channel, either kind.
    pub trait Channel<T> {
        /// Sends `item`, returning `false` if the receiver has hung up.
        fn push(&self, item: T) -> bool;
    }

    impl<T> Channel<T> for Sender<T> {
        #[inline]
        fn push(&self, item: T) -> bool {
            self.send(item).is_ok()
        }
    }

    impl<T> Channel<T> for SyncSender<T> {
        #[inline]
        fn push(&self, item: T) -> bool {
            self.send(item).is_ok()
        }
    }
}

use private::Channel;

/// A consumer that sends a clone of every item through a channel.
/// Its [`Output`](Consumer::Output) is the sender, handed back once the pass is over.
///
/// It works with a [`Sender`] as well as a [`SyncSender`], whose `send`
/// blocks while the channel is full.
///
/// If the receiver has hung up, the sink stops. The item that found the
/// receiver gone is lost.
///
/// # Examples
///
/// ```
/// use std::{sync::mpsc, thread};
/// use onepass::{prelude::*, iter::Count, sync::mpsc::Forward};
///
/// let (tx, rx) = mpsc::channel();
///
/// let total = thread::spawn(move || rx.iter().sum::<i32>());
///
/// let (count, tx) = [1, 2, 3]
///     .request(Count::new())
///     .and(Forward::new(tx))
///     .finalize()
///     .unwrap();
///
/// drop(tx);
/// assert_eq!(count, 3);
/// assert_eq!(total.join().unwrap(), 6);
/// ```
pub struct Forward<S> {
    sender: S,
}

impl<S> Forward<S> {
    /// Creates a consumer sending through `sender`.
    #[inline]
    pub const fn new(sender: S) -> Self {
        Self { sender }
    }
}

impl<S: Clone> Clone for Forward<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S> Debug for Forward<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forward").finish_non_exhaustive()
    }
}

impl<S> ConsumerBase for Forward<S> {}

impl<T: Clone> Consumer<T> for Forward<Sender<T>> {
    type Output = Sender<T>;
    type Sink = ForwardSink<Sender<T>>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ForwardSink {
            sender: self.sender,
        }
    }
}

impl<T: Clone> Consumer<T> for Forward<SyncSender<T>> {
    type Output = SyncSender<T>;
    type Sink = ForwardSink<SyncSender<T>>;

    #[inline]
    fn into_sink(self) -> Self::Sink {
        ForwardSink {
            sender: self.sender,
        }
    }
}

/// The [`Sink`] of [`Forward`].
pub struct ForwardSink<S> {
    sender: S,
}

impl<T, S> Sink<T> for ForwardSink<S>
where
    T: Clone,
    S: Channel<T>,
{
    type Output = S;

    #[inline]
    fn accept_next(&mut self, item: &T) -> ControlFlow<()> {
        if self.sender.push(item.clone()) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    #[inline]
    fn finish(self) -> Result<Self::Output, SinkError> {
        Ok(self.sender)
    }
}

impl<S> Debug for ForwardSink<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardSink").finish_non_exhaustive()
    }
}
