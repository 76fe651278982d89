use thiserror::Error;

/// Errors raised while validating or grouping an input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// The input is empty once leading and trailing whitespace is trimmed.
    #[error("empty input")]
    EmptyInput,

    /// Two consecutive spaces produced an empty token.
    ///
    /// Only raised under [`EmptyTokenPolicy::Reject`](crate::EmptyTokenPolicy::Reject).
    /// `position` is the byte offset of the empty token in the trimmed input.
    #[error("empty token at byte offset {position}")]
    EmptyToken { position: usize },
}

pub type Result<T, E = GroupingError> = std::result::Result<T, E>;
