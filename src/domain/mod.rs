//! Domain layer for the zroster plugin.
//!
//! Core types and rules independent of Zellij APIs: the user record shapes,
//! normalization of remote records, form drafts with validation, and errors.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: Remote, canonical and payload user shapes
//! - [`normalize`]: `RawUser -> UserRecord`
//! - [`draft`]: Form drafts and validation rules

pub mod draft;
pub mod error;
pub mod normalize;
pub mod user;

pub use draft::{validate, FieldErrors, FormDraft};
pub use error::{Result, RosterError};
pub use normalize::normalize;
pub use user::{Company, RawUser, TextField, UserId, UserPayload, UserRecord};
