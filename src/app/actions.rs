//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event and
//! the shim executes them in order. Keeping effects as data lets the whole
//! screen be driven and inspected without a Zellij host.

use crate::client::RepositoryCall;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends an HTTP request through the host.
    ///
    /// The host replies later with `WebRequestResult`, carrying the call's
    /// context map back unchanged.
    Fetch(RepositoryCall),
}
