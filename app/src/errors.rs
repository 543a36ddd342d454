#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The typewriter needs at least one phrase")]
    NoPhrases,

    #[error("No section is anchored at `#{id}'")]
    UnknownSection { id: String },

    #[error("Could not {operation}: {error}")]
    Host { operation: &'static str, error: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps a failure reported by a browser API.
    pub fn host(operation: &'static str, error: impl std::fmt::Debug) -> Self {
        Error::Host {
            operation,
            error: format!("{error:?}"),
        }
    }
}
