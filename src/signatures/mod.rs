//! Digital signature schemes.
//!
//! This module groups the signature algorithms built on top of the
//! crate's elliptic-curve arithmetic.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its own signature types, signing logic, and
//! verification rules. The implementations are intentionally explicit
//! and self-contained, favoring clarity and auditability over
//! abstraction.
//!
//! Currently provided:
//!
//! - `schnorr`
//!   Schnorr signatures over a caller-supplied prime-field curve group,
//!   made non-interactive through a hash-derived challenge
//!   (Fiat-Shamir). The challenge hash is injectable; SHA-256 is the
//!   default.

pub mod schnorr;
