//! Generic in-memory store for resource entities.
//!
//! This module provides the building blocks for keeping a keyed set of entities
//! with standard CRUD operations and a patch hook.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic store that owns the entities
//! - [`FrameworkError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use self::core::*;
