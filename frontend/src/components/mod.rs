//! UI Components for the Team Builder application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Page title and subtitle
//! - [`Footer`] - Backend requirements note
//!
//! # Feature Components
//! - [`FileInputs`] - One PDF picker per category
//! - [`ParsePanel`] - Parse actions (separate or single PDF)
//! - [`CategoryEditors`] - Editable name lists
//! - [`OptionsPanel`] - Generation options and the generate action
//! - [`TeamsPanel`] - Generated teams, export, copy and reset
//! - [`QuickStats`] - Participant counts

mod header;
mod upload;
mod categories;
mod options;
mod teams;
mod stats;
mod footer;

pub use header::*;
pub use upload::*;
pub use categories::*;
pub use options::*;
pub use teams::*;
pub use stats::*;
pub use footer::*;
