use thiserror::Error;

/// The display text is surfaced to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in at least your name, email, and message")]
    MissingRequiredFields,
}
