//! edgebench-app - Application state and orchestration for edgebench
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`handler::update`] the only place state changes, and
//! [`UpdateAction`]s the side effects the event loop performs (network calls,
//! timers, clipboard, external editor). It also owns the report model and
//! panel, the category filter, the clipboard and export bridges, and
//! configuration loading.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod export;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod report;
pub mod session;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::ActionContext;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use session::{RequestId, Session};
pub use state::{AppState, UiMode};
