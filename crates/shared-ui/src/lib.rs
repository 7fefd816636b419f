//! Shared presentational components for the dashboard.
//!
//! Everything here is stateless: components render props and forward DOM
//! events through `EventHandler`s. Application state lives in the app crate.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::*;
