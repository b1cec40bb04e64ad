//! Hybrid secure-messaging primitives.
//!
//! This crate provides the cryptographic building blocks of a small
//! hybrid messaging scheme: a symmetric Feistel block cipher with a
//! block-chaining mode, and elliptic-curve public-key encryption and
//! signing over a caller-supplied prime-field curve.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Every
//! component is a pure function of its explicit inputs: randomness and
//! hash primitives are injected by the caller, curve parameters are
//! plain data, and no component retains state across calls.
//!
//! # Module overview
//!
//! - `curve`
//!   Prime-field elliptic-curve arithmetic: immutable points, the group
//!   law (addition, doubling, negation), double-and-add scalar
//!   multiplication, and the field helpers (modular inverse, square
//!   root) these operations rely on. All arithmetic uses arbitrary
//!   precision integers; field moduli of 256-bit scale are first-class.
//!
//! - `keys`
//!   Key material shared by the asymmetric schemes: a `KeyPair` binding
//!   a private scalar in `[1, n-1]` to its public point, generated from
//!   a caller-provided cryptographically secure generator.
//!
//!   No encryption, signing, or protocol logic lives here, only key
//!   structure and derivation.
//!
//! - `encryption`
//!   Encryption schemes, symmetric and asymmetric: a FEAL-style Feistel
//!   block cipher on 8-byte blocks, a CBC chaining mode generic over
//!   any block cipher, and EC-ElGamal point encryption with a minimal
//!   message-to-point encoding.
//!
//! - `signatures`
//!   Digital signatures: a Schnorr scheme made non-interactive through
//!   a caller-chosen hash function (SHA-256 by default).
//!
//! # Design goals
//!
//! - Explicit `Result`-based error reporting; verification failures are
//!   ordinary boolean outcomes, never panics
//! - Deterministic behavior given explicit inputs; all entropy flows
//!   through injected generators
//! - Minimal and explicit APIs
//! - Clear separation between key material and the algorithms that
//!   consume it
//!
//! This crate demonstrates the algorithms themselves. It makes no
//! attempt at side-channel resistance or production key management, and
//! the FEAL key schedule in particular is a structural placeholder, not
//! a security boundary.

pub mod curve;
pub mod encryption;
pub mod keys;
pub mod signatures;
