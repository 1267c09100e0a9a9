use thiserror::Error;

/// Custom error types for grammar construction and generation
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Invalid grammar: {0}")]
    InvalidGrammar(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Recursion limit exceeded expanding `{symbol}` at depth {depth}")]
    RecursionLimitExceeded { symbol: String, depth: usize },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Trait extension for Option<T> to convert to GrammarError
pub trait OptionExt<T> {
    /// Map `None` to [`GrammarError::UnknownSymbol`] naming `symbol`
    fn ok_or_unknown(self, symbol: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_unknown(self, symbol: &str) -> Result<T> {
        self.ok_or_else(|| GrammarError::UnknownSymbol(symbol.to_string()))
    }
}
