//! Domain models shared across the bridge.

pub mod signal;

pub use signal::{Action, Signal};
