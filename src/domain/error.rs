//! Domain error types.

/// Top-level error type for targetreturn.
#[derive(Debug, thiserror::Error)]
pub enum TargetReturnError {
    #[error("invalid value for {field} '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required argument {field}")]
    MissingArgument { field: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("result is undefined: {reason}")]
    UndefinedResult { reason: String },
}

impl From<&TargetReturnError> for std::process::ExitCode {
    fn from(err: &TargetReturnError) -> Self {
        let code: u8 = match err {
            TargetReturnError::UndefinedResult { .. } => 1,
            TargetReturnError::InvalidArgument { .. }
            | TargetReturnError::MissingArgument { .. }
            | TargetReturnError::ConfigParse { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
