use std::fmt;

/// Error raised when a [`Config`](crate::Config) cannot produce a usable
/// grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height below the minimum of 2.
    GridTooSmall { width: i32, height: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { width, height } => {
                write!(f, "grid width and height must be min 2, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error raised by minimum selection on an empty working set.
///
/// The search loop checks for emptiness before selecting, so reaching this
/// from a path query indicates a broken loop invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySetError;

impl fmt::Display for EmptySetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("working set is empty")
    }
}

impl std::error::Error for EmptySetError {}

/// Errors returned by path queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The frontier was exhausted without reaching the goal.
    NoPath,
    /// Minimum selection failed on an empty frontier.
    EmptySet(EmptySetError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath => f.write_str("no path found"),
            Self::EmptySet(err) => write!(f, "cannot get min f node: {err}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoPath => None,
            Self::EmptySet(err) => Some(err),
        }
    }
}

impl From<EmptySetError> for PathError {
    fn from(err: EmptySetError) -> Self {
        Self::EmptySet(err)
    }
}
