//! Session Lifecycle Events
//!
//! The HTTP layer must not know how the hosting application navigates,
//! so session expiry is reported on a channel instead of performing a
//! redirect itself. The shell owns the receiving end and wires it to
//! its own navigation.

use tokio::sync::mpsc;

/// Events emitted by the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A protected call answered 401: the persisted token has been
    /// removed and the in-memory session must be torn down
    Expired,
}

/// Sending half handed to the HTTP client
pub type SessionEventSender = mpsc::UnboundedSender<SessionEvent>;

/// Receiving half owned by the hosting application
pub type SessionEventReceiver = mpsc::UnboundedReceiver<SessionEvent>;

/// Create a session event channel
pub fn session_event_channel() -> (SessionEventSender, SessionEventReceiver) {
    mpsc::unbounded_channel()
}
