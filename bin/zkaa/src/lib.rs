pub mod cli;
pub mod deploy;
pub mod utils;
