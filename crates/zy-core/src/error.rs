/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing hexagram data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A line value outside {6, 7, 8, 9}.
    #[error("invalid line value: {0} (expected 6, 7, 8, or 9)")]
    InvalidLineValue(u8),

    /// A hexagram number outside 1..=64.
    #[error("invalid hexagram number: {0} (expected 1..=64)")]
    InvalidHexagramNumber(u8),

    /// A line sequence that is not exactly six lines long.
    #[error("invalid line count: {0} (a hexagram has exactly 6 lines)")]
    InvalidLineCount(usize),
}
