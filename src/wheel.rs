//! Wheel: one rotating disk of the cypher.
//!
//! A wheel carries the 27 alphabet symbols around its rim in the order
//! given by a permutation template. Encoding a symbol turns the wheel
//! until that symbol sits on the reference line and reads off the whole
//! rim from there.

use tracing::trace;

use crate::alphabet::{self, ALPHABET_LEN, PERMUTATION_SUM};
use crate::error::{PermutationFault, WheelCypherError};

/// A single alphabet wheel.
///
/// The face is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    face: [char; ALPHABET_LEN],
}

impl Wheel {
    /// Builds a wheel from a permutation template.
    ///
    /// Validation is a length and checksum test: the template must hold
    /// exactly 27 values summing to 378, and every value must name an
    /// alphabet symbol (`1..=27`). Repeated values with a compensating
    /// sum are accepted; use [`new_strict`](Self::new_strict) to reject
    /// them.
    ///
    /// # Errors
    /// Returns [`WheelCypherError::InvalidPermutation`] if the template
    /// fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelcypher::templates::TEMPLATES;
    /// use wheelcypher::Wheel;
    ///
    /// let wheel = Wheel::new(&TEMPLATES[0]).unwrap();
    /// assert_eq!(wheel.face()[0], 'A');
    ///
    /// assert!(Wheel::new(&TEMPLATES[0][..26]).is_err());
    /// ```
    pub fn new(template: &[u8]) -> Result<Self, WheelCypherError> {
        if template.len() != ALPHABET_LEN {
            return Err(PermutationFault::Length(template.len()).into());
        }
        let sum: u32 = template.iter().map(|&v| v as u32).sum();
        if sum != PERMUTATION_SUM {
            return Err(PermutationFault::Checksum(sum).into());
        }

        let mut face = [alphabet::FILLER; ALPHABET_LEN];
        for (index, (slot, &value)) in face.iter_mut().zip(template).enumerate() {
            *slot = alphabet::symbol_at(value)
                .ok_or(PermutationFault::OutOfRange { index, value })?;
        }
        Ok(Wheel { face })
    }

    /// Builds a wheel, additionally rejecting templates with repeated values.
    ///
    /// # Errors
    /// Everything [`new`](Self::new) rejects, plus
    /// [`PermutationFault::Duplicate`] for a value that appears twice.
    pub fn new_strict(template: &[u8]) -> Result<Self, WheelCypherError> {
        let wheel = Self::new(template)?;
        let mut seen = [false; ALPHABET_LEN];
        for &value in template {
            let slot = &mut seen[value as usize - 1];
            if *slot {
                return Err(PermutationFault::Duplicate { value }.into());
            }
            *slot = true;
        }
        Ok(wheel)
    }

    /// Returns the symbols in physical face order.
    pub fn face(&self) -> &[char; ALPHABET_LEN] {
        &self.face
    }

    /// Returns the face index of `symbol`, or `None` if it is not on the wheel.
    pub fn position_of(&self, symbol: char) -> Option<usize> {
        self.face.iter().position(|&s| s == symbol)
    }

    /// Rotates the wheel so `symbol` is first and reads the full face.
    ///
    /// The result is `face[(offset + i) % 27]` for `i` in `0..27`, where
    /// `offset` is the face index of `symbol`. Element 0 is always
    /// `symbol` itself.
    ///
    /// # Errors
    /// Returns [`WheelCypherError::SymbolNotFound`] if `symbol` is not on
    /// the wheel.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelcypher::templates::TEMPLATES;
    /// use wheelcypher::Wheel;
    ///
    /// let wheel = Wheel::new(&TEMPLATES[0]).unwrap();
    /// let rows = wheel.encode('Q').unwrap();
    /// assert_eq!(rows[0], 'Q');
    /// assert!(wheel.encode('q').is_err());
    /// ```
    pub fn encode(&self, symbol: char) -> Result<[char; ALPHABET_LEN], WheelCypherError> {
        let offset = self
            .position_of(symbol)
            .ok_or(WheelCypherError::SymbolNotFound { symbol })?;
        trace!(symbol = %symbol, offset, "rotating wheel");

        let mut rows = self.face;
        rows.rotate_left(offset);
        Ok(rows)
    }
}
