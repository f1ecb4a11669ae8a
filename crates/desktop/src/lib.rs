//! `pantry-desktop`
//!
//! **Responsibility:** the presentation collaborator for the purchase tracker.
//!
//! This crate provides:
//! - Environment configuration (store location)
//! - `ProductApp`, a form-shaped facade over `ProductManager` that turns every
//!   action into a typed `Outcome` ready to show to the user
//! - A line-oriented terminal front end built on the same facade
//!
//! The core model lives in `pantry-products` / `pantry-infra`; this crate is a
//! **thin shell** around it.

pub mod app;
pub mod config;
pub mod input;
pub mod terminal;

pub use app::{Outcome, ProductApp, Severity};
pub use config::DesktopConfig;
pub use input::{parse_number, InputError};
