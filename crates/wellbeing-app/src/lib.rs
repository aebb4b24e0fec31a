// Application + HTTP presentation layers

pub mod application;
pub mod presentation;

pub use presentation::{build_router, run, ApiError, AppState};
