use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors produced while rendering query text.
///
/// A failure anywhere in the tree aborts the whole render: ancestors
/// propagate the error instead of splicing in partial text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("graph pattern nesting exceeds the maximum depth of {max} (reached {depth})")]
    DepthLimitExceeded { depth: usize, max: usize },
}
