//! Application state.
//!
//! All mutable session state lives in [`AppState`], owned by the event loop
//! and passed explicitly to controller, event and render functions.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::View;

