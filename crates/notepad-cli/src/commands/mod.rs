pub mod common;
pub mod completions;
pub mod config;
pub mod line;
pub mod run;
pub mod session;
