// NOTE: refdata CLI layout
//
// handlers/      one module per command; load through refdata-runtime, shape
//                the result with a presenter, hand it to a renderer
// presentation/  view models (serializable), presenters (domain -> view
//                model), views (text and ratatui widgets), renderers
//
// The tree itself is never stored. Every command that shows the department
// hierarchy fetches the flat list and rebuilds the forest with
// refdata-engine.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
