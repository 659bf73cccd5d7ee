pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::TerminalConsole;
pub use crate::core::{engine::InversionEngine, inverter::NumberInverter, validator::InputValidator};
pub use domain::{model::InvertedNumber, ports::Console};
pub use utils::error::{InvertirError, Result};
