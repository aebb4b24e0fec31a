pub mod checklist_commands;
pub mod command_handler;
pub mod handlers;
pub mod user_commands;

pub use checklist_commands::*;
pub use command_handler::{Command, CommandHandler};
pub use user_commands::*;
