//! Share record and its `(x, y)` text form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One evaluation `(x, p(x))` of a secret polynomial.
///
/// Both coordinates are integer encodings of field elements. `x` is never 0
/// for shares produced by [`ShamirScheme::share`](crate::ShamirScheme::share).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// Evaluation point
    pub x: u64,
    /// Polynomial value at `x`
    pub y: u64,
}

impl Share {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseShareError {
    #[error("expected a share of the form (x, y), got {0:?}")]
    Malformed(String),

    #[error("invalid share coordinate {0:?}")]
    InvalidCoordinate(String),
}

impl FromStr for Share {
    type Err = ParseShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseShareError::Malformed(s.to_string());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (x, y) = inner.split_once(',').ok_or_else(malformed)?;

        let coordinate = |part: &str| {
            let part = part.trim();
            part.parse::<u64>()
                .map_err(|_| ParseShareError::InvalidCoordinate(part.to_string()))
        };
        Ok(Self::new(coordinate(x)?, coordinate(y)?))
    }
}
