pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::CalcConfig;
pub use crate::core::{
    calculator::CalculatorModel,
    command::Command,
    session::{RunSummary, Session, SessionSettings},
};
pub use domain::model::{BinaryOp, CalculatorState, StackSnapshot};
pub use domain::ports::{CalculatorListener, ListenerId};
pub use utils::error::{CalcError, OperationError, Result};
