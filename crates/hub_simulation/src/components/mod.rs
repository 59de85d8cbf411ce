//! ECS Components для hub-сцены
//!
//! Организация по доменам:
//! - knight: управляемый персонаж (Knight, KnightPhase, WalkSpeed, WalkCycle, RenderPose, PendingTarget)
//! - door: интерактивные двери (Door, DoorAnimation, DoorConfig)
//! - world: границы и константы сцены (WalkableBounds, tuning constants)

pub mod door;
pub mod knight;
pub mod world;

// Re-exports для удобного импорта
pub use door::*;
pub use knight::*;
pub use world::*;
