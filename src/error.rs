/// Errors raised when setting up a sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// A window must contain at least one element.
    #[error("window size must be at least 1, got 0")]
    EmptyWindow,
}
