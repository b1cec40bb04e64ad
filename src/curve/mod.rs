//! Prime-field elliptic-curve arithmetic.
//!
//! This module implements affine point arithmetic on short Weierstrass
//! curves `y² = x³ + ax + b` over F_p, for caller-supplied parameters.
//! It provides the group law (addition, doubling, negation), scalar
//! multiplication by double-and-add, and the description of the cyclic
//! subgroup (generator and order) the asymmetric schemes operate in.
//!
//! All coordinates and scalars are arbitrary-precision integers, so
//! field moduli of 256-bit scale carry no truncation risk.
//!
//! ## Provided types
//!
//! - [`Point`]
//!   An immutable curve point: either the point at infinity or an
//!   affine coordinate pair.
//!
//! - [`Curve`]
//!   The curve parameters `(p, a, b)` together with the group law.
//!
//! - [`CurveGroup`]
//!   A curve plus a generator and its exact order, shared read-only by
//!   the encryption and signature schemes.
//!
//! ## Scope and limitations
//!
//! The arithmetic here is correctness-oriented, not constant-time, and
//! the modulus is trusted to be prime. These helpers are the foundation
//! for the EC-ElGamal and Schnorr modules; they perform no key
//! management and no randomness handling of their own.

mod core;
pub(crate) mod field;

pub use self::core::{Curve, CurveError, CurveGroup, Point};
