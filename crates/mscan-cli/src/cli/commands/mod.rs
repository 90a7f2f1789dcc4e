//! CLI command handlers, one per file.

mod art;
mod check;
mod status;

pub use art::run_art;
pub use check::{run_check, CheckOptions};
pub use status::run_status;
