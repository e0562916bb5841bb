/// Crate-wide result alias.
pub type BlankClipResult<T> = Result<T, BlankClipError>;

/// Every failure the crate reports.
///
/// Messages start with the name of the operation that detected the problem
/// (`parse_preset: ...`). Outer operations prepend their own name with
/// [`BlankClipError::within`] without changing the kind.
#[derive(thiserror::Error, Debug)]
pub enum BlankClipError {
    /// Preset string does not match the preset grammar.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// Color is out of range, malformed or of an unusable type.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Resolved clip or composition parameters are unusable.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Pixel format is unknown or has no color conversion.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Duration is not a positive integer.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// JSON configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure reported by an external collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlankClipError {
    /// Construct [`BlankClipError::InvalidPreset`].
    pub fn invalid_preset(msg: impl Into<String>) -> Self {
        Self::InvalidPreset(msg.into())
    }

    /// Construct [`BlankClipError::InvalidColor`].
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Construct [`BlankClipError::InvalidParameters`].
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Construct [`BlankClipError::UnsupportedFormat`].
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Construct [`BlankClipError::InvalidDuration`].
    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    /// Construct [`BlankClipError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Prefix the message with an outer operation name, keeping the kind.
    pub fn within(self, op: &str) -> Self {
        match self {
            Self::InvalidPreset(m) => Self::InvalidPreset(format!("{op}: {m}")),
            Self::InvalidColor(m) => Self::InvalidColor(format!("{op}: {m}")),
            Self::InvalidParameters(m) => Self::InvalidParameters(format!("{op}: {m}")),
            Self::UnsupportedFormat(m) => Self::UnsupportedFormat(format!("{op}: {m}")),
            Self::InvalidDuration(m) => Self::InvalidDuration(format!("{op}: {m}")),
            Self::Config(m) => Self::Config(format!("{op}: {m}")),
            Self::Other(e) => Self::Other(e.context(op.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
