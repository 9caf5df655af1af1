//! Front-end chat state.
//!
//! `ChatController` owns the single `AppState` and moves it along the
//! session lifecycle: Uninitialized, SessionPending, Ready, SendingTurn,
//! and Blocked when the remote session could not be created.

mod controller;
mod types;


pub use controller::{ChatController, SubmitError};
pub use types::{Phase, Role, Turn, TurnKind};
