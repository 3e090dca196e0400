pub type LinemarkResult<T> = Result<T, LinemarkError>;

#[derive(thiserror::Error, Debug)]
pub enum LinemarkError {
    #[error("path contains non-allowed character '{found}': {text}")]
    InvalidCharacter { found: char, text: String },

    #[error("path parameter is not a number: {0}")]
    InvalidNumber(String),

    #[error("invalid parameter count for {operator}: expected a multiple of {arity}, got {got}")]
    InvalidParameterCount {
        operator: char,
        arity: usize,
        got: usize,
    },

    #[error("invalid path operator: {0}")]
    InvalidOperator(char),

    #[error("rotation requires an absolute path without H/V commands: {0}")]
    InvalidRotationInput(String),

    #[error("invalid pattern part: {0}")]
    InvalidPatternPart(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LinemarkError {
    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber(token.into())
    }

    pub fn invalid_rotation_input(msg: impl Into<String>) -> Self {
        Self::InvalidRotationInput(msg.into())
    }

    pub fn invalid_pattern_part(msg: impl Into<String>) -> Self {
        Self::InvalidPatternPart(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
