//! Common types and error definitions for dubins_routing
//!
//! This module provides the foundational building blocks used across
//! the geometry, solver, and aggregation layers.

pub mod types;
pub mod error;

pub use types::*;
pub use error::*;
