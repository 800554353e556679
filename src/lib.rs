//! Library entry for linotour, a terminal tour of Raul Lino's buildings in
//! Abrantes. Exposes the core modules for the binary and the integration tests.

pub mod app;
pub mod args;
pub mod data;
pub mod events;
pub mod geo;
pub mod i18n;
pub mod location;
pub mod logic;
pub mod map;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
