//! # wheel-core — Shared domain types for the weighted wheel engine
//!
//! Defines the data the engine and its hosts exchange: outcome categories,
//! sector definitions (the angular slices of the wheel) and the item catalog
//! each category draws from. The rendering surface never sees engine
//! internals — only these types.

pub mod catalog;
pub mod sector;

pub use catalog::*;
pub use sector::*;
