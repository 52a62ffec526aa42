use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UtilError {
    Assertion(String),
    ColSize { grid: u32, items: u32 },
    TokenNotFound(String),
    TimestampOutOfRange(String),
    UnexpectedSwitchValue { name: String, value: String },
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::Assertion(msg) => write!(f, "{}", msg),
            UtilError::ColSize { grid, items } => {
                write!(
                    f,
                    "Number of cols must be divisible by {} (got {} items)",
                    grid, items
                )
            }
            UtilError::TokenNotFound(address) => {
                write!(f, "No token found for address {}", address)
            }
            UtilError::TimestampOutOfRange(ts) => {
                write!(f, "Unix timestamp {} is out of range", ts)
            }
            UtilError::UnexpectedSwitchValue { name, value } => write!(
                f,
                "Unexpected switch value: {} encountered for {}",
                value, name
            ),
        }
    }
}

impl std::error::Error for UtilError {}

/// Fails with `message` when `condition` does not hold.
pub fn assert(condition: bool, message: &str) -> Result<(), UtilError> {
    if !condition {
        return Err(UtilError::Assertion(message.to_string()));
    }
    Ok(())
}

pub fn spawn_switch_err(name: &str, value: impl fmt::Display) -> UtilError {
    UtilError::UnexpectedSwitchValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}
