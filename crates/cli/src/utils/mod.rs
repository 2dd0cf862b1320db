pub mod command_helpers;
pub mod logging;
pub mod output;
