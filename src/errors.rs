use std::fmt;

/// Validation failures raised synchronously at the offending call.
///
/// Nothing here is transient and nothing is fatal: a rejected call leaves
/// the caller's state untouched, and the caller decides whether to surface
/// a diagnostic or drop the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// Concealed tile count does not match the locked meld count
    /// (must be 13 or 14 minus three per meld).
    InvalidHandShape { tiles: u8, melds: u8 },
    /// A tile kind appears more than four times across the concealed hand
    /// and melds.
    TileMultiplicityExceeded { kind: u8, count: u8 },
    /// Scoring was requested for a hand that is not complete.
    NotAWinningHand { shanten: i8 },
    /// A meld list that cannot coexist on one hand.
    UnsupportedMeldCombination { melds: usize },
    /// Tile or hand notation that could not be parsed.
    Parse { input: String, message: String },
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::InvalidHandShape { tiles, melds } => {
                write!(
                    f,
                    "invalid hand shape: {} concealed tiles with {} melds",
                    tiles, melds
                )
            }
            HandError::TileMultiplicityExceeded { kind, count } => {
                write!(f, "tile kind {} appears {} times (max 4)", kind, count)
            }
            HandError::NotAWinningHand { shanten } => {
                write!(f, "not a winning hand: shanten is {}", shanten)
            }
            HandError::UnsupportedMeldCombination { melds } => {
                write!(f, "unsupported meld combination: {} melds", melds)
            }
            HandError::Parse { input, message } => {
                write!(f, "parse error on '{}': {}", input, message)
            }
        }
    }
}

impl std::error::Error for HandError {}

pub type HandResult<T> = Result<T, HandError>;

#[cfg(feature = "python")]
impl From<HandError> for pyo3::PyErr {
    fn from(err: HandError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
