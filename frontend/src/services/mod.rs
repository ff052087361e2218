//! Backend and browser services.
//!
//! # Services
//!
//! - [`api`] - PDF parsing and team generation calls to the backend
//! - [`browser`] - CSV download and clipboard access

pub mod api;
pub mod browser;

pub use api::*;
pub use browser::*;
