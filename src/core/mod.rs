pub mod calculator;
pub mod command;
pub mod session;

pub use crate::domain::model::{BinaryOp, CalculatorState, StackSnapshot};
pub use crate::domain::ports::{CalculatorListener, ListenerId};
pub use crate::utils::error::Result;
