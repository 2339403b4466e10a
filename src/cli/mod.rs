//! CLI module - argument parsing, interactive prompts and the terminal wizard

mod args;
pub mod fields;
mod prompts;
pub mod wizard;

pub use args::{Cli, Commands, ContactArgs};
pub use prompts::*;
pub use wizard::{run_wizard, FlowScreen, WizardResult};
