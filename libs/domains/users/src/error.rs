use thiserror::Error;

/// Errors surfaced by the users domain.
///
/// Expected "no match" outcomes are never errors: lookups return
/// `Option::None` and create/delete return `false`. Only store-level
/// faults (connectivity, constraint violations) are raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("{0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;
