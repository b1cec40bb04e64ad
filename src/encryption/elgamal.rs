//! EC-ElGamal public-key encryption.
//!
//! Encrypts curve points under a recipient's public key using an
//! ephemeral scalar: `c1 = k·G`, `c2 = M + k·P`. Decryption recovers
//! `M = c2 - priv·c1`, where the subtraction negates the shared point
//! into a fresh value (points are never mutated in place).
//!
//! ## Message encoding
//!
//! Byte payloads are mapped onto the curve by interpreting them as a
//! big-endian integer `x` and searching forward (`x`, `x+1`, …, each
//! candidate reduced modulo `p`) for the first `x` whose curve
//! polynomial value is a quadratic residue; `y` is recovered with the
//! `p ≡ 3 (mod 4)` square-root shortcut.
//!
//! This encoding is minimal and deliberately not a bijection: if the
//! search advances past the literal payload value, or the payload
//! starts with zero bytes, decoding would return different bytes. Both
//! cases are detected by an encode-time round-trip self-check and
//! reported as errors instead of silently corrupting the payload.
//! Callers must keep payloads smaller than the field prime.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::curve::{CurveError, CurveGroup, Point};
use crate::keys::KeyPair;

/// Upper bound on encode-search increments.
///
/// Roughly half of all field elements are quadratic residues, so a
/// handful of attempts suffices on any genuine prime field; the bound
/// guarantees termination on pathological parameters.
const MAX_ENCODE_ATTEMPTS: usize = 1000;

/// Errors produced by EC-ElGamal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElGamalError {
    /// The payload, read as a big-endian integer, does not lie below
    /// the field prime.
    MessageTooLarge,

    /// No encodable x-coordinate was found within the search bound.
    NotEncodable,

    /// The encoded point does not decode back to the original payload
    /// (the search advanced past the literal value, or the payload has
    /// leading zero bytes).
    RoundTripMismatch,

    /// The field prime is not congruent to 3 modulo 4, so the square
    /// root shortcut used by the encoding does not apply.
    UnsupportedField,

    /// The identity point carries no coordinates and cannot encode or
    /// decode a payload.
    IdentityPoint,

    /// An underlying curve arithmetic error.
    Curve(CurveError),
}

impl From<CurveError> for ElGamalError {
    fn from(err: CurveError) -> Self {
        ElGamalError::Curve(err)
    }
}

/// An EC-ElGamal ciphertext: the ephemeral point and the masked
/// message point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalCiphertext {
    /// Ephemeral point `k · G`.
    pub c1: Point,
    /// Masked message `M + k · P`.
    pub c2: Point,
}

/// EC-ElGamal over a caller-supplied curve group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcElGamal {
    group: CurveGroup,
}

impl EcElGamal {
    /// Creates the scheme over the given group.
    pub fn new(group: CurveGroup) -> Self {
        Self { group }
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

    /// Encodes a byte payload as a curve point.
    ///
    /// The payload is read as a big-endian integer and pushed forward
    /// to the nearest x-coordinate with a valid y. A round-trip
    /// self-check guarantees that [`decode_message`](Self::decode_message)
    /// returns exactly the original bytes.
    ///
    /// # Errors
    ///
    /// - [`ElGamalError::UnsupportedField`] if `p ≢ 3 (mod 4)`
    /// - [`ElGamalError::MessageTooLarge`] if the payload value is not
    ///   below `p`
    /// - [`ElGamalError::NotEncodable`] if the search bound is
    ///   exhausted
    /// - [`ElGamalError::RoundTripMismatch`] if the found point would
    ///   decode to different bytes
    pub fn encode_message(&self, message: &[u8]) -> Result<Point, ElGamalError> {
        let curve = self.group.curve();
        let p = curve.p();

        if p % BigUint::from(4u8) != BigUint::from(3u8) {
            return Err(ElGamalError::UnsupportedField);
        }

        let value = BigUint::from_bytes_be(message);
        if &value >= p {
            return Err(ElGamalError::MessageTooLarge);
        }

        let mut x = value;
        let mut found = None;

        for _ in 0..MAX_ENCODE_ATTEMPTS {
            x %= p;

            let rhs = curve.rhs(&x);
            if let Some(y) = crate::curve::field::sqrt_mod(&rhs, p) {
                found = Some(Point::Affine { x, y });
                break;
            }

            x += BigUint::one();
        }

        let point = found.ok_or(ElGamalError::NotEncodable)?;

        if self.decode_message(&point)? != message {
            return Err(ElGamalError::RoundTripMismatch);
        }

        Ok(point)
    }

    /// Decodes a point back into the byte payload it encodes.
    ///
    /// Returns the minimal big-endian byte representation of the
    /// point's x-coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::IdentityPoint`] for the identity.
    pub fn decode_message(&self, point: &Point) -> Result<Vec<u8>, ElGamalError> {
        match point.x() {
            Some(x) => Ok(x.to_bytes_be()),
            None => Err(ElGamalError::IdentityPoint),
        }
    }

    /// Encrypts a message point under the recipient's public key.
    ///
    /// Draws an ephemeral scalar `k` from `[1, n-1]` and produces
    /// `(k·G, M + k·P)`.
    ///
    /// # Errors
    ///
    /// Propagates curve arithmetic errors.
    pub fn encrypt<R>(
        &self,
        message: &Point,
        public_key: &Point,
        rng: &mut R,
    ) -> Result<ElGamalCiphertext, ElGamalError>
    where
        R: RngCore + CryptoRng,
    {
        let curve = self.group.curve();
        let k = rng.gen_biguint_range(&BigUint::one(), self.group.order());

        let c1 = curve.multiply(&k, self.group.generator())?;
        let mask = curve.multiply(&k, public_key)?;
        let c2 = curve.add(message, &mask)?;

        Ok(ElGamalCiphertext { c1, c2 })
    }

    /// Decrypts a ciphertext with the recipient's private scalar.
    ///
    /// Computes `c2 + (-(priv · c1))`; the negation builds a new point.
    ///
    /// # Errors
    ///
    /// Propagates curve arithmetic errors.
    pub fn decrypt(
        &self,
        ciphertext: &ElGamalCiphertext,
        private_key: &BigUint,
    ) -> Result<Point, ElGamalError> {
        let curve = self.group.curve();

        let shared = curve.multiply(private_key, &ciphertext.c1)?;
        let neutralizer = curve.negate(&shared);

        Ok(curve.add(&ciphertext.c2, &neutralizer)?)
    }
}
