//! # wheel-engine — Weighted sector selection & rotation continuity
//!
//! Drives a spin-the-wheel decision widget: maps sector geometry to outcome
//! probability, samples outcomes, and plans wheel rotation so repeated spins
//! stay visually continuous (the wheel only ever rotates forward).
//!
//! ## Architecture
//!
//! ```text
//! WheelEngine
//!     │
//!     ├── WheelConfig (sectors, catalog, geometry, tuning)
//!     ├── SectorLayout (cumulative angular ranges, cached)
//!     ├── SpinTiming (animation duration profiles)
//!     └── StdRng (seedable)
//!           │
//!           v
//!     spin(now) → Spinning → poll(now) → Resolved → SpinResult + items
//! ```
//!
//! Rendering is a host concern: the engine publishes a rotation angle, a
//! phase, and a resolved outcome; the host draws the wheel and the pointer.

pub mod config;
pub mod engine;
pub mod layout;
pub mod rotation;
pub mod sampler;
pub mod selector;
pub mod spin;
pub mod timing;

pub use config::*;
pub use engine::*;
pub use layout::*;
pub use rotation::*;
pub use sampler::*;
pub use selector::*;
pub use spin::*;
pub use timing::*;
