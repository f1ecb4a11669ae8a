//! `pantry-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod timestamp;
pub mod value_object;

pub use entity::Entity;
pub use error::{LookupError, LookupResult};
pub use timestamp::{date_part, now_timestamp, TIMESTAMP_FORMAT};
pub use value_object::ValueObject;
