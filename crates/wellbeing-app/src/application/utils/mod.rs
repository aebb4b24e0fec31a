mod blocking;
mod result_ext;

pub use blocking::run_blocking;
pub use result_ext::ResultExt;
