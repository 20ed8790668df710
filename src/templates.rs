//! Permutation templates of the six historical wheels.
//!
//! Each template lists, in physical face order, the 1-based alphabet
//! position of every symbol on the wheel. They reproduce the drum sold
//! at Valley Forge and are never derived or modified at runtime.

use crate::alphabet::ALPHABET_LEN;

/// Number of distinct wheel templates.
pub const NUM_TEMPLATES: usize = 6;

/// A wheel permutation: face position `i` carries `ALPHABET[t[i] - 1]`.
pub type Template = [u8; ALPHABET_LEN];

/// The six wheel templates, in drum order.
#[rustfmt::skip]
pub const TEMPLATES: [Template; NUM_TEMPLATES] = [
    [1, 27, 12, 15, 22, 20, 26, 19, 13, 8, 14, 10, 18,
     21, 9, 5, 23, 3, 4, 17, 16, 11, 2, 25, 7, 24, 6],
    [1, 24, 26, 20, 11, 25, 13, 8, 16, 5, 19, 4, 21,
     18, 6, 12, 23, 9, 22, 15, 7, 14, 2, 17, 27, 10, 3],
    [1, 10, 4, 23, 17, 9, 25, 3, 6, 24, 13, 21, 19, 7, 12,
     2, 26, 20, 8, 27, 18, 22, 5, 14, 11, 16, 15],
    [1, 5, 22, 4, 17, 21, 12, 9, 2, 19, 10, 27, 8, 14, 16,
     6, 23, 13, 25, 11, 7, 24, 3, 26, 20, 18, 15],
    [1, 8, 21, 14, 6, 18, 9, 12, 20, 7, 27, 13, 4, 15, 17,
     16, 5, 24, 19, 25, 10, 11, 22, 23, 2, 3, 26],
    [1, 5, 21, 13, 4, 7, 26, 18, 10, 2, 17, 20, 24, 3, 27,
     19, 12, 25, 6, 16, 14, 9, 22, 15, 8, 11, 23],
];
