//! Schnorr signatures over a prime-field curve group.
//!
//! Signing proves knowledge of the discrete logarithm of the public
//! key: an ephemeral scalar `k` commits to `R = k·G`, a hash-derived
//! challenge `e` binds the commitment to the message, and the response
//! `s = k + e·priv mod n` closes the proof. Verification checks
//! `s·G == R + e·P`.
//!
//! ## Challenge hash contract
//!
//! The challenge digests, in order: the raw message bytes, the ASCII
//! decimal encoding of `R.x`, and the ASCII decimal encoding of `R.y`;
//! the digest is then reduced modulo the group order. Conforming
//! implementations must agree on these input bytes exactly.
//!
//! The hash primitive is injected as a type parameter so callers can
//! substitute any fixed-output digest; SHA-256 is the default.

use std::marker::PhantomData;

use digest::Digest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

use crate::curve::{CurveError, CurveGroup, Point};
use crate::keys::KeyPair;

/// A Schnorr signature: the commitment point and the response scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Commitment `R = k · G`.
    pub r: Point,
    /// Response `s = (k + e · priv) mod n`, in `[0, n-1]`.
    pub s: BigUint,
}

/// Schnorr signing and verification over a curve group.
///
/// Generic over the challenge digest `D`; the default is SHA-256.
#[derive(Debug, Clone)]
pub struct Schnorr<D: Digest = Sha256> {
    group: CurveGroup,
    digest: PhantomData<D>,
}

impl<D: Digest> Schnorr<D> {
    /// Creates the scheme over the given group.
    pub fn new(group: CurveGroup) -> Self {
        Self {
            group,
            digest: PhantomData,
        }
    }

    /// The group this scheme operates in.
    pub fn group(&self) -> &CurveGroup {
        &self.group
    }

    /// Generates a fresh key pair for this scheme.
    ///
    /// # Errors
    ///
    /// Propagates curve arithmetic errors from key derivation.
    pub fn generate_keypair<R>(&self, rng: &mut R) -> Result<KeyPair, CurveError>
    where
        R: RngCore + CryptoRng,
    {
        KeyPair::generate(&self.group, rng)
    }

    /// Derives the challenge scalar for a message and commitment.
    ///
    /// Hashes `message ‖ dec(x) ‖ dec(y)` and reduces the digest
    /// modulo the group order.
    fn challenge(&self, message: &[u8], x: &BigUint, y: &BigUint) -> BigUint {
        let mut hasher = D::new();
        hasher.update(message);
        hasher.update(x.to_str_radix(10).as_bytes());
        hasher.update(y.to_str_radix(10).as_bytes());

        BigUint::from_bytes_be(hasher.finalize().as_slice()) % self.group.order()
    }

    /// Signs a message with the private scalar.
    ///
    /// Draws the ephemeral scalar `k` from `[1, n-1]` using the
    /// provided secure generator.
    ///
    /// # Errors
    ///
    /// Propagates curve arithmetic errors.
    pub fn sign<R>(
        &self,
        message: &[u8],
        private_key: &BigUint,
        rng: &mut R,
    ) -> Result<Signature, CurveError>
    where
        R: RngCore + CryptoRng,
    {
        let k = rng.gen_biguint_range(&BigUint::one(), self.group.order());

        self.sign_with_ephemeral(message, private_key, &k)
    }

    /// Signs with an explicit ephemeral scalar.
    ///
    /// Exists so deterministic callers (and cross-implementation test
    /// vectors) can fix `k`; ordinary callers use [`sign`](Self::sign).
    /// Reusing an ephemeral scalar across two messages reveals the
    /// private key.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ScalarOutOfRange`] unless `k` lies in
    /// `[1, n-1]`, and propagates curve arithmetic errors.
    pub fn sign_with_ephemeral(
        &self,
        message: &[u8],
        private_key: &BigUint,
        k: &BigUint,
    ) -> Result<Signature, CurveError> {
        let n = self.group.order();

        if k < &BigUint::one() || k >= n {
            return Err(CurveError::ScalarOutOfRange);
        }

        let r = self
            .group
            .curve()
            .multiply(k, self.group.generator())?;

        // k ∈ [1, n-1] and n is the exact generator order, so R is
        // never the identity.
        let e = match (r.x(), r.y()) {
            (Some(x), Some(y)) => self.challenge(message, x, y),
            _ => return Err(CurveError::ScalarOutOfRange),
        };
        let s = (k + e * private_key) % n;

        Ok(Signature { r, s })
    }

    /// Verifies a signature against a message and public key.
    ///
    /// Accepts iff `s·G == R + e·P`, compared coordinate-wise with the
    /// identity treated as a distinct value. Verification failure is an
    /// ordinary `Ok(false)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ScalarOutOfRange`] if `s` is not in
    /// `[0, n-1]` (a malformed signature object rather than a forgery),
    /// and propagates curve arithmetic errors.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
        public_key: &Point,
    ) -> Result<bool, CurveError> {
        let n = self.group.order();

        if &signature.s >= n {
            return Err(CurveError::ScalarOutOfRange);
        }

        // The challenge is undefined for an identity commitment; no
        // honest signer can produce one.
        let (x, y) = match (signature.r.x(), signature.r.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Ok(false),
        };

        let curve = self.group.curve();
        let e = self.challenge(message, x, y);

        let lhs = curve.multiply(&signature.s, self.group.generator())?;
        let shifted = curve.multiply(&e, public_key)?;
        let rhs = curve.add(&signature.r, &shifted)?;

        Ok(lhs == rhs)
    }
}
