//! Error type shared by the whole crate.

/// Errors raised while building curves or estimating their length
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BezierError {
    /// A caller supplied value outside the accepted domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration document could not be read or parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type BezierResult<T> = Result<T, BezierError>;

impl BezierError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BezierError::invalid("accuracy must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid argument: accuracy must be positive, got 0"
        );

        let err = BezierError::Config("missing file".to_string());
        assert_eq!(err.to_string(), "invalid configuration: missing file");
    }
}
