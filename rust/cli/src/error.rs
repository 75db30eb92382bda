//! Error types for the CLI application.
//!
//! One `CliError` enum covers everything a subcommand can fail with, so
//! handlers can propagate with `?` and `run` maps any error to exit
//! code 2.

use std::fmt;

use pazaak_ai::StrategyError;
use pazaak_engine::GameError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<StrategyError> for CliError {
    fn from(error: StrategyError) -> Self {
        match error {
            StrategyError::Unknown(_) => CliError::InvalidInput(error.to_string()),
            StrategyError::ModelUnavailable(_) => CliError::Config(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_strategy_maps_to_invalid_input() {
        let err: CliError = StrategyError::Unknown("bogus".into()).into();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn missing_model_maps_to_config_error() {
        let err: CliError = StrategyError::ModelUnavailable("no path".into()).into();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn game_error_maps_to_engine_error() {
        let err: CliError = GameError::InvalidRules("goal must be positive".into()).into();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
