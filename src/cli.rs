//! CLI domain: parse, route and output only.
//! No generation logic; the route table dispatches to the generator and emitter.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, GenerateArgs};
pub use route::RunContext;
