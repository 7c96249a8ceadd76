//! Utility helpers: the actor arena, logging, and step statistics.

pub mod allocator;
pub mod logging;
pub mod profiling;

pub use allocator::{ActorId, Arena};
pub use profiling::UpdateStats;
