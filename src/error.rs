#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Unknown username and wrong password share this variant.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("No active session")]
    NoActiveSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Field `{0}` cannot be empty")]
    EmptyField(&'static str),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::StorageUnavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
