//! User repository client.
//!
//! Zellij web requests are fire-and-callback: the plugin asks the host to
//! perform a request and later receives `WebRequestResult` with the status,
//! body and the context map it attached. Each repository operation is
//! therefore split into request construction ([`UserRepository`] producing a
//! [`RepositoryCall`]) and reply decoding ([`decode_reply`]).

pub mod reply;
pub mod request;
pub mod trace;

pub use reply::{decode_reply, Reply, ReplyContext};
pub use request::{Method, Operation, RepositoryCall, RequestTag, UserRepository, DEFAULT_ENDPOINT};
pub use trace::TraceContext;
