//! Command handlers.
//!
//! Handlers wire concrete adapters into a core service and run it. They
//! hold no lifecycle logic of their own.

pub mod display;
pub mod probe;
