pub mod output;
pub mod prompts;
pub mod render;
mod shell;
pub mod validate;

pub use shell::{run_cli, SCRIPT_MODE_ENV};
