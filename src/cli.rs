//! CLI domain: parse, route, output, and presentation only.
//! No pipeline logic; the route hands a fixed layout to `pipeline::run`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_run_summary, format_section_heading};
pub use route::RunContext;
