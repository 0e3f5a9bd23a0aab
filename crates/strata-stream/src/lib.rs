//! Sliding-window streaming: window controller, boundary evictors, and the
//! per-tick world runtime.
#![forbid(unsafe_code)]

pub mod evict;
pub mod runtime;
pub mod window;

pub use evict::BoundaryEvictor;
pub use runtime::{Viewport, WorldRuntime};
pub use window::{WindowController, WindowUpdate};
