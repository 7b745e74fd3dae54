pub mod args;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Cli, Commands, InitArgs, ListArgs};
pub use runner::{run_init, run_list};
