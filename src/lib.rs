//! Wheel cypher engine in the style of the Jefferson disk.
//!
//! A wheel cypher is a drum of rotating alphabet wheels. Each wheel
//! carries the 27-symbol alphabet (`A`-`Z` plus the `*` filler) in its own
//! scrambled order. Lining up a message along the drum and reading any
//! other line across the wheels yields a candidate ciphertext.
//!
//! This crate reproduces the 12-wheel drum sold at Valley Forge. It is a
//! historical mechanism and offers no cryptographic security.
//!
//! # Architecture
//!
//! ```text
//! Wheel  (one disk: permutation of the alphabet, rotated per symbol)
//!     ↕ 12 wheels, templates 1..6 twice
//! Drum   (pads to 12-symbol blocks, turns one wheel per symbol,
//!         transposes wheel rotations into 27 output rows)
//! ```
//!
//! # Examples
//!
//! Encode a message into its 27 candidate rows:
//!
//! ```
//! use wheelcypher::Drum;
//!
//! let drum = Drum::new();
//! let rows = drum.encode("HELLO").unwrap();
//!
//! assert_eq!(rows.len(), 27);
//! assert_eq!(rows[0], "HELLOZZZZZZZ");
//! assert_eq!(rows[1], "NSBIQRSTTTAR");
//! ```
//!
//! Symbols outside the wheel alphabet are reported with their position:
//!
//! ```
//! use wheelcypher::{Drum, WheelCypherError};
//!
//! let err = Drum::new().encode("AB3").unwrap_err();
//! assert_eq!(err, WheelCypherError::SymbolNotFoundAt { symbol: '3', position: 2 });
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod templates;

mod drum;
mod wheel;

pub use drum::{Drum, NUM_WHEELS};
pub use error::{PermutationFault, WheelCypherError};
pub use wheel::Wheel;
