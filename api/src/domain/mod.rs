//! Domain layer
//!
//! Contains pure business types with no external dependencies.
//! - `entities`: Customer aggregate and its embedded addresses
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
