//! Error types for square-core operations

/// Result type for square-core operations
pub type Result<T> = std::result::Result<T, ArgumentError>;

/// Raised when a call does not receive exactly one positional argument.
///
/// The display text matches the wording the host runtime uses for its own
/// native argument-parsing failures. Conversion failures are not modelled
/// here: the host's real-number protocol raises those itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Wrong number of positional arguments
    #[error("function takes exactly {expected} {} ({given} given)", plural(.expected))]
    Arity { expected: usize, given: usize },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}
