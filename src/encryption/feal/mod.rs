//! FEAL-style Feistel block cipher.
//!
//! This module implements an 8-round Feistel network on 64-bit blocks
//! with the FEAL S-box round function. It exists as the symmetric
//! workhorse of the hybrid messaging scheme: a message key is sealed
//! asymmetrically, then the message itself runs through this cipher in
//! a chaining mode.
//!
//! The implementation is split into two layers:
//!
//! - `core`: key schedule, round function, and single-block
//!   encryption/decryption
//!
//! The exact byte-level behavior of the round function and key schedule
//! is an interoperability contract; conforming implementations must
//! agree on every output byte. Neither is a vetted cryptographic
//! design: the cipher demonstrates Feistel structure, it is not a
//! security boundary.

mod core;

pub use self::core::{BLOCK_SIZE, Feal};
