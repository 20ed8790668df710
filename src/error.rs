//! Error types for the wheelcypher library.

use thiserror::Error;

/// Why a permutation template was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationFault {
    /// Template does not hold exactly 27 values.
    #[error("expected 27 values, got {0}")]
    Length(usize),
    /// Template values do not sum to 378.
    #[error("values sum to {0}, expected 378")]
    Checksum(u32),
    /// A value has no alphabet symbol (outside `1..=27`).
    #[error("value {value} at index {index} is outside 1..=27")]
    OutOfRange { index: usize, value: u8 },
    /// A value appears more than once (strict validation only).
    #[error("value {value} appears twice")]
    Duplicate { value: u8 },
}

/// Errors produced by the wheelcypher library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelCypherError {
    /// A wheel template failed validation.
    #[error("Invalid wheel permutation: {fault}")]
    InvalidPermutation { fault: PermutationFault },

    /// A symbol is not on the wheel face.
    #[error("Symbol {symbol:?} is not on the wheel")]
    SymbolNotFound { symbol: char },

    /// A message symbol is not on the wheel assigned to its position.
    #[error("Symbol {symbol:?} at position {position} is not on the wheel")]
    SymbolNotFoundAt { symbol: char, position: usize },
}

impl WheelCypherError {
    /// Returns the offending symbol for the symbol-lookup errors.
    pub fn symbol(&self) -> Option<char> {
        match self {
            WheelCypherError::SymbolNotFound { symbol }
            | WheelCypherError::SymbolNotFoundAt { symbol, .. } => Some(*symbol),
            WheelCypherError::InvalidPermutation { .. } => None,
        }
    }

    /// Attaches a message position to a [`SymbolNotFound`](Self::SymbolNotFound).
    pub(crate) fn at(self, position: usize) -> Self {
        match self {
            WheelCypherError::SymbolNotFound { symbol } => {
                WheelCypherError::SymbolNotFoundAt { symbol, position }
            }
            other => other,
        }
    }
}

impl From<PermutationFault> for WheelCypherError {
    fn from(fault: PermutationFault) -> Self {
        WheelCypherError::InvalidPermutation { fault }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_length() {
        let err = WheelCypherError::from(PermutationFault::Length(26));
        assert_eq!(
            format!("{}", err),
            "Invalid wheel permutation: expected 27 values, got 26"
        );
    }

    #[test]
    fn test_display_invalid_checksum() {
        let err = WheelCypherError::from(PermutationFault::Checksum(377));
        assert_eq!(
            format!("{}", err),
            "Invalid wheel permutation: values sum to 377, expected 378"
        );
    }

    #[test]
    fn test_display_symbol_not_found() {
        let err = WheelCypherError::SymbolNotFound { symbol: '3' };
        assert_eq!(format!("{}", err), "Symbol '3' is not on the wheel");
    }

    #[test]
    fn test_display_symbol_not_found_at() {
        let err = WheelCypherError::SymbolNotFoundAt {
            symbol: '3',
            position: 2,
        };
        assert_eq!(
            format!("{}", err),
            "Symbol '3' at position 2 is not on the wheel"
        );
    }

    #[test]
    fn test_at_annotates_symbol_errors_only() {
        let err = WheelCypherError::SymbolNotFound { symbol: '!' }.at(7);
        assert_eq!(
            err,
            WheelCypherError::SymbolNotFoundAt {
                symbol: '!',
                position: 7
            }
        );

        let err = WheelCypherError::from(PermutationFault::Duplicate { value: 3 }).at(7);
        assert_eq!(
            err,
            WheelCypherError::InvalidPermutation {
                fault: PermutationFault::Duplicate { value: 3 }
            }
        );
    }

    #[test]
    fn test_symbol_accessor() {
        assert_eq!(WheelCypherError::SymbolNotFound { symbol: 'x' }.symbol(), Some('x'));
        assert_eq!(
            WheelCypherError::from(PermutationFault::Length(0)).symbol(),
            None
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            WheelCypherError::SymbolNotFound { symbol: 'a' },
            WheelCypherError::SymbolNotFound { symbol: 'a' }
        );
        assert_ne!(
            WheelCypherError::SymbolNotFound { symbol: 'a' },
            WheelCypherError::SymbolNotFoundAt {
                symbol: 'a',
                position: 0
            }
        );
    }
}
