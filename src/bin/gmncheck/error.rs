use thiserror::Error;

#[derive(Error, Debug)]
/// Internal enum.
pub enum CliError {
    #[error("{0}")]
    /// Internal variant.
    Message(String),

    #[error("input not found: {0}")]
    /// Internal variant.
    InputNotFound(String),

    #[error(transparent)]
    /// Internal variant.
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Internal variant.
    Gmn(#[from] gmncheck::Error),

    #[error(transparent)]
    /// Internal variant.
    Json(#[from] serde_json::Error),
}

/// Internal type alias.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Internal helper method.
    pub fn user_message(&self) -> String {
        use gmncheck::Error as GmnError;
        match self {
            Self::Message(msg) => msg.clone(),
            Self::Gmn(
                err @ (GmnError::NonDigitPrefix { .. }
                | GmnError::InvalidDataCharacter { .. }
                | GmnError::InvalidCheckCharacter { .. }),
            ) => format!(
                "{err}\nNext: run `gmncheck positions <INPUT>` to mark every rejected character"
            ),
            Self::InputNotFound(_) | Self::Io(_) | Self::Gmn(_) | Self::Json(_) => self.to_string(),
        }
    }
}
