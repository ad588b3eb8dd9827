use crate::core::calculator::CalculatorModel;
use crate::domain::model::BinaryOp;
use crate::utils::error::{CalcError, OperationError};
use std::fmt;
use std::str::FromStr;

/// One calculator action, as named by a single input token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Replace the accumulator with a value.
    Enter(f64),
    Clear,
    Push,
    Pop,
    Drop,
    DropAll,
    Swap,
    Binary(BinaryOp),
}

impl Command {
    pub fn apply(&self, model: &mut CalculatorModel) -> Result<(), OperationError> {
        match *self {
            Command::Enter(value) => model.set_accumulator(value),
            Command::Clear => model.clear_accumulator(),
            Command::Push => model.push(),
            Command::Pop => {
                model.pop();
            }
            Command::Drop => {
                model.drop_top();
            }
            Command::DropAll => {
                model.drop_all();
            }
            Command::Swap => {
                model.swap();
            }
            Command::Binary(operation) => model.apply(operation)?,
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        // 數字優先，所以 "-3" 是數值而 "-" 是減法
        if let Ok(value) = token.parse::<f64>() {
            return Ok(Command::Enter(value));
        }

        let command = match token.to_ascii_lowercase().as_str() {
            "push" | "enter" => Command::Push,
            "pop" => Command::Pop,
            "drop" => Command::Drop,
            "dropall" | "drop-all" | "drop_all" => Command::DropAll,
            "swap" => Command::Swap,
            "clear" | "c" => Command::Clear,
            "+" | "add" => Command::Binary(BinaryOp::Add),
            "-" | "sub" => Command::Binary(BinaryOp::Sub),
            "*" | "x" | "mul" => Command::Binary(BinaryOp::Mul),
            "/" | "div" => Command::Binary(BinaryOp::Div),
            _ => {
                return Err(CalcError::UnknownCommand {
                    token: token.to_string(),
                })
            }
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Enter(value) => write!(f, "{}", value),
            Command::Clear => f.write_str("clear"),
            Command::Push => f.write_str("push"),
            Command::Pop => f.write_str("pop"),
            Command::Drop => f.write_str("drop"),
            Command::DropAll => f.write_str("dropall"),
            Command::Swap => f.write_str("swap"),
            Command::Binary(operation) => f.write_str(operation.symbol()),
        }
    }
}
