//! Completion channels for the asynchronous operations.
//!
//! Each operation reports through its own single-purpose channel. A
//! [`Completion`] receives the outcome exactly once, after the network call
//! finishes. `None` means no URL could be obtained.
//!
//! # Implementations
//!
//! - Any `FnOnce(Option<String>) + Send + 'static` closure
//! - [`tokio::sync::oneshot::Sender<Option<String>>`]
//! - [`shortened_event`] / [`lengthened_event`] for fanning both operations
//!   into one [`mpsc`] channel of [`UrlEvent`]s

use tokio::sync::{mpsc, oneshot};
use tracing::warn;

/// Receiver of a single operation outcome.
pub trait Completion: Send + 'static {
    /// Delivers the outcome. Called exactly once per dispatched operation.
    fn complete(self, value: Option<String>);
}

impl<F> Completion for F
where
    F: FnOnce(Option<String>) + Send + 'static,
{
    fn complete(self, value: Option<String>) {
        self(value)
    }
}

impl Completion for oneshot::Sender<Option<String>> {
    fn complete(self, value: Option<String>) {
        // Receiver dropped: caller no longer cares about the outcome.
        let _ = self.send(value);
    }
}

/// Tagged outcome for callers that consume both operations from one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlEvent {
    /// Result of a shorten request: the short URL, or `None` on failure.
    Shortened(Option<String>),
    /// Result of a lengthen request: the long URL, the original short URL when
    /// no redirect was offered, or `None` on failure.
    Lengthened(Option<String>),
}

/// Wraps an event sender as a completion for shorten requests.
///
/// Delivery is non-blocking: if the channel is full or closed, the event is
/// dropped and a warning is logged.
pub fn shortened_event(tx: mpsc::Sender<UrlEvent>) -> impl Completion {
    move |value: Option<String>| send_event(&tx, UrlEvent::Shortened(value))
}

/// Wraps an event sender as a completion for lengthen requests.
///
/// Same delivery semantics as [`shortened_event`].
pub fn lengthened_event(tx: mpsc::Sender<UrlEvent>) -> impl Completion {
    move |value: Option<String>| send_event(&tx, UrlEvent::Lengthened(value))
}

fn send_event(tx: &mpsc::Sender<UrlEvent>, event: UrlEvent) {
    if let Err(e) = tx.try_send(event) {
        warn!("Dropping URL event: {}", e);
    }
}
