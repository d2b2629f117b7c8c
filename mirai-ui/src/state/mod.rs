//! State Management
//!
//! Shared handle to the dashboard core and the canvas surface it draws on.

pub mod canvas;
pub mod global;

pub use canvas::CanvasSurface;
pub use global::{provide_global_state, GlobalState};
