//! linotour application module.
//!
//! Terminal lifecycle, channels, background tasks and the event loop that owns
//! the single `AppState`.

/// Runtime event loop and background tasks.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
pub use runtime::handlers::LocationRuntime;
pub use runtime::init::{build_provider, initialize_app_state, load_documents};
