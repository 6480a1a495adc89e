//! TOML configuration and binaries of the ocwm window manager.
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod command;
mod config;
pub mod utils;

pub use command::*;
pub use config::*;
