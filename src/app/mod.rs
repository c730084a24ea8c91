//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain,
//! pipeline and client layers. It follows a unidirectional data flow pattern:
//!
//! ```text
//! Keys → Events → Event Handler → State Mutations → Actions → web_request
//!                      ↑                                          ↓
//!                      └──────────── WebRequestResult ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`keys`]: Key-to-event mapping per input mode
//! - [`modes`]: Input mode state machine
//! - [`mutation`]: Create/update/delete coordination
//! - [`state`]: Screen state and intents
//! - [`store`]: Record store
//! - [`view`]: View model computation

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod mutation;
pub mod state;
pub mod store;
mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::InputMode;
pub use mutation::{DeletePhase, FormMode, FormPhase, MutationCoordinator};
pub use state::AppState;
pub use store::RecordStore;
