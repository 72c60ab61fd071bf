//! # Presentation Layer
//!
//! Output is built in one direction:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts. No domain types, no logic.
//!   The JSON output is exactly these structs.
//! * `presenters/`: pure functions from domain data to view models.
//! * `views/`: `fmt::Display` text views and ratatui widgets over view models.
//! * `renderers/`: console (text or JSON) and the interactive browser loop.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
