use crate::domain::model::BinaryOp;
use thiserror::Error;

/// Failures of the arithmetic operations. Both are raised before any state
/// is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("Insufficient operands for {operation}: push a first operand before applying it")]
    InsufficientOperands { operation: BinaryOp },

    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("Unknown command: {token}")]
    UnknownCommand { token: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// 是否為計算錯誤 (而非設定或 IO 錯誤)
    pub fn is_operation_error(&self) -> bool {
        matches!(self, CalcError::Operation(_) | CalcError::UnknownCommand { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Operation(OperationError::InsufficientOperands { operation }) => {
                format!("Cannot {}: the stack is empty", operation)
            }
            CalcError::Operation(OperationError::DivisionByZero) => {
                "Cannot divide by zero".to_string()
            }
            CalcError::UnknownCommand { token } => {
                format!("'{}' is neither a number nor a known command", token)
            }
            CalcError::IoError(e) => format!("Could not read file: {}", e),
            CalcError::SerializationError(e) => format!("Could not serialize state: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' for '{}' is invalid: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::Operation(OperationError::InsufficientOperands { .. }) => {
                "Enter a value and 'push' it before applying a binary operation"
            }
            CalcError::Operation(OperationError::DivisionByZero) => {
                "Set a non-zero divisor in the accumulator"
            }
            CalcError::UnknownCommand { .. } => {
                "Use a number or one of: push pop drop dropall swap clear + - * /"
            }
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::SerializationError(_) => "Retry without --json",
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_error_converts_into_calc_error() {
        let err: CalcError = OperationError::DivisionByZero.into();
        assert!(err.is_operation_error());
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_insufficient_operands_names_operation() {
        let err = OperationError::InsufficientOperands {
            operation: BinaryOp::Mul,
        };
        assert!(err.to_string().contains("mul"));

        let friendly = CalcError::from(err).user_friendly_message();
        assert_eq!(friendly, "Cannot mul: the stack is empty");
    }

    #[test]
    fn test_config_errors_are_not_operation_errors() {
        let err = CalcError::ConfigValidationError {
            field: "logging.level".to_string(),
            message: "bad".to_string(),
        };
        assert!(!err.is_operation_error());
        assert_eq!(err.recovery_suggestion(), "Fix the configuration file and try again");
    }
}
