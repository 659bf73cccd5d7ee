pub mod engine;
pub mod inverter;
pub mod validator;

pub use crate::domain::model::InvertedNumber;
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
