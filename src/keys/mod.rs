//! Asymmetric key material.
//!
//! This module defines the key pair type shared by the EC-ElGamal and
//! Schnorr schemes. Both schemes draw private scalars the same way and
//! derive public points the same way, so the key structure lives here,
//! apart from the algorithms that consume it.
//!
//! Each scheme instance is expected to use an independent key pair,
//! even when both operate over the same [`CurveGroup`].
//!
//! No signing, encryption, or protocol logic lives here, only key
//! structure and derivation.

use std::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::curve::{CurveError, CurveGroup, Point};

/// A private scalar together with its derived public point.
///
/// The private scalar lies in `[1, n-1]` for the group order `n`, and
/// the public point is `private · G`. The pair is immutable once
/// created.
///
/// The private scalar is deliberately kept out of the `Debug` output
/// and is never serialized by this crate; the public point is freely
/// shareable.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: BigUint,
    public: Point,
}

impl KeyPair {
    /// Generates a fresh key pair from the provided secure generator.
    ///
    /// The private scalar is drawn uniformly from `[1, n-1]`.
    ///
    /// # Errors
    ///
    /// Propagates curve arithmetic errors from the public-point
    /// derivation.
    pub fn generate<R>(group: &CurveGroup, rng: &mut R) -> Result<Self, CurveError>
    where
        R: RngCore + CryptoRng,
    {
        let private = rng.gen_biguint_range(&BigUint::one(), group.order());

        Self::from_private(group, private)
    }

    /// Builds a key pair from an existing private scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ScalarOutOfRange`] unless the scalar lies
    /// in `[1, n-1]`.
    pub fn from_private(group: &CurveGroup, private: BigUint) -> Result<Self, CurveError> {
        if private < BigUint::one() || &private >= group.order() {
            return Err(CurveError::ScalarOutOfRange);
        }

        let public = group.curve().multiply(&private, group.generator())?;

        Ok(Self { private, public })
    }

    /// The private scalar.
    ///
    /// Exposed for the schemes that need it; never log or serialize
    /// this value.
    pub fn private(&self) -> &BigUint {
        &self.private
    }

    /// The public point `private · G`.
    pub fn public(&self) -> &Point {
        &self.public
    }
}

impl fmt::Debug for KeyPair {
    /// Formats the key pair without revealing the private scalar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}
