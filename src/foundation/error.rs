/// Convenience result type used across the utilities.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    /// Malformed line in a line-oriented input (1-based line number).
    #[error("parse error at line {line}: {msg}")]
    Parse {
        /// Line the error was detected on.
        line: usize,
        /// Human readable description.
        msg: String,
    },

    /// Invalid user-provided paths or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or unreadable tool configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// An external tool could not be started or exited unsuccessfully.
    #[error("tool error: {0}")]
    Tool(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScriptError {
    /// Build a [`ScriptError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }

    /// Build a [`ScriptError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScriptError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScriptError::Tool`] value.
    pub fn tool(msg: impl Into<String>) -> Self {
        Self::Tool(msg.into())
    }

    /// Build a [`ScriptError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
