pub mod commands;
pub mod dtos;
pub mod queries;
pub mod services;
pub mod utils;

pub use utils::ResultExt;

#[cfg(test)]
pub(crate) mod testing;
