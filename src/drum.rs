//! Drum: the ordered stack of wheels that encodes a message.
//!
//! The drum holds 12 wheels built from the six templates twice over.
//! A message is split into 12-symbol blocks; each symbol turns the wheel
//! at its block position, and the 27 lines across the drum become the
//! candidate ciphertext rows.

use tracing::debug;

use crate::alphabet::{ALPHABET_LEN, PAD};
use crate::error::WheelCypherError;
use crate::templates::TEMPLATES;
use crate::wheel::Wheel;

/// Number of wheels on the drum, and the block size of an encoding.
pub const NUM_WHEELS: usize = 12;

/// Fixed drum of 12 alphabet wheels.
///
/// Wheel `i` is built from template `i % 6`, reproducing the order of the
/// Valley Forge drum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drum {
    wheels: Vec<Wheel>,
}

impl Default for Drum {
    fn default() -> Self {
        Self::new()
    }
}

impl Drum {
    /// Creates the drum from the built-in templates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelcypher::Drum;
    ///
    /// let drum = Drum::new();
    /// assert_eq!(drum.len(), 12);
    /// ```
    pub fn new() -> Self {
        let wheels = TEMPLATES
            .iter()
            .cycle()
            .take(NUM_WHEELS)
            .map(|template| Wheel::new(template).expect("built-in template is a valid permutation"))
            .collect();
        debug!(wheels = NUM_WHEELS, "drum assembled");
        Drum { wheels }
    }

    /// Returns the wheels in drum order.
    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    /// Returns the number of wheels (always 12).
    pub fn len(&self) -> usize {
        self.wheels.len()
    }

    /// Always `false`; a drum always carries its wheels.
    pub fn is_empty(&self) -> bool {
        self.wheels.is_empty()
    }

    /// Splits `message` into symbols and right-pads it with `'Z'` to a
    /// multiple of 12.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelcypher::Drum;
    ///
    /// let padded: String = Drum::pad("HELLO").into_iter().collect();
    /// assert_eq!(padded, "HELLOZZZZZZZ");
    /// ```
    pub fn pad(message: &str) -> Vec<char> {
        let mut symbols: Vec<char> = message.chars().collect();
        let padded_len = symbols.len().div_ceil(NUM_WHEELS) * NUM_WHEELS;
        symbols.resize(padded_len, PAD);
        symbols
    }

    /// Encodes `message` into its 27 candidate ciphertext rows.
    ///
    /// Symbol `j` of the padded message turns wheel `j % 12`; row `r` of
    /// the result is symbol `r` of every wheel's rotation, read left to
    /// right. Every row is as long as the padded message and row 0
    /// reproduces the padded message itself.
    ///
    /// # Errors
    /// Returns [`WheelCypherError::SymbolNotFoundAt`] for the first symbol
    /// that is not in the wheel alphabet. No rows are returned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelcypher::Drum;
    ///
    /// let drum = Drum::new();
    /// let rows = drum.encode("ABCDEFGHIJKL").unwrap();
    /// assert_eq!(rows.len(), 27);
    /// assert_eq!(rows[0], "ABCDEFGHIJKL");
    /// assert_eq!(rows[1], "*QFQXPXPY*VY");
    ///
    /// assert!(drum.encode("AB3").is_err());
    /// ```
    pub fn encode(&self, message: &str) -> Result<Vec<String>, WheelCypherError> {
        let symbols = Self::pad(message);
        debug!(
            message_len = message.chars().count(),
            padded_len = symbols.len(),
            blocks = symbols.len() / NUM_WHEELS,
            "encoding message"
        );

        let columns = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.wheels[position % self.wheels.len()]
                    .encode(symbol)
                    .map_err(|e| e.at(position))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<String> = (0..ALPHABET_LEN)
            .map(|r| columns.iter().map(|column| column[r]).collect::<String>())
            .collect();
        Ok(rows)
    }
}
