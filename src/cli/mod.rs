pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args, SkipConfirm};
pub use runner::{run, run_with_provider, Runner};
