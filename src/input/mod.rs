pub mod command;
pub mod handler;

pub use command::Command;
pub use handler::{InputOutcome, apply_command, handle_input, map_key};
