pub mod batch;
pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;

pub use calculator::{BmrMode, calculate};
pub use error::{Result, TdeeError};
pub use models::{ActivityLevel, Derived, Inputs};
