#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Profile store error: {0}")]
    Store(String),

    #[error("Portfolio generation failed: {0}")]
    Generation(String),
}
