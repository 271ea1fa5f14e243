pub mod cli;
pub mod logging;

pub use cli::{run, run_to, Cli, Commands};
pub use logging::init_tracing;
