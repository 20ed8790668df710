//! The fixed 27-symbol alphabet engraved on every wheel.
//!
//! The 26 uppercase Latin letters followed by the filler symbol `*`.
//! Permutation templates refer to symbols by 1-based position in
//! [`ALPHABET`].

/// Number of symbols on a wheel.
pub const ALPHABET_LEN: usize = 27;

/// The wheel alphabet in canonical order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '*',
];

/// Filler symbol, the last entry of the alphabet.
pub const FILLER: char = '*';

/// Symbol appended to messages until they fill whole drum blocks.
///
/// Padding uses `'Z'`, not [`FILLER`]. Ciphertext produced by the
/// historical tool depends on this.
pub const PAD: char = 'Z';

/// Sum of `1..=27`, the checksum every permutation template must match.
pub const PERMUTATION_SUM: u32 = (ALPHABET_LEN * (ALPHABET_LEN + 1) / 2) as u32;

/// Returns the symbol designated by a 1-based template value.
///
/// # Returns
/// `None` if `value` is outside `1..=27`.
pub fn symbol_at(value: u8) -> Option<char> {
    match value as usize {
        v @ 1..=ALPHABET_LEN => Some(ALPHABET[v - 1]),
        _ => None,
    }
}

/// Returns the 0-based position of `symbol` in [`ALPHABET`].
pub fn index_of(symbol: char) -> Option<usize> {
    match symbol {
        'A'..='Z' => Some(symbol as usize - 'A' as usize),
        FILLER => Some(ALPHABET_LEN - 1),
        _ => None,
    }
}

/// Returns `true` if `symbol` can appear on a wheel face.
pub fn contains(symbol: char) -> bool {
    index_of(symbol).is_some()
}
