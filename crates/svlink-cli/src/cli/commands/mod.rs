//! CLI command handlers. Each command is in its own file.

mod analyze;
mod completions;
mod parse;

pub use analyze::run_analyze;
pub use completions::run_completions;
pub use parse::run_parse;
