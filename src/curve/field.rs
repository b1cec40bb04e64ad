//! Prime-field helper arithmetic.
//!
//! These routines implement the handful of modular operations the group
//! law needs on top of `BigUint`: subtraction that stays inside the
//! field, multiplicative inversion, and the square root shortcut for
//! fields where `p ≡ 3 (mod 4)`.
//!
//! All helpers assume the modulus is an odd prime. Primality is a
//! caller guarantee and is not checked here; feeding a composite
//! modulus yields undefined (but memory-safe) results.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::core::CurveError;

/// Computes `(a - b) mod p` without leaving the non-negative range.
///
/// Both operands must already be reduced modulo `p`.
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a + p) - b) % p
}

/// Computes the multiplicative inverse of `a` modulo the prime `p`.
///
/// The inverse is obtained through Fermat's little theorem
/// (`a^(p-2) mod p`), which is defined for every nonzero residue of a
/// prime field.
///
/// # Errors
///
/// Returns [`CurveError::NonInvertible`] if `a ≡ 0 (mod p)`.
pub(crate) fn inverse(a: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    let reduced = a % p;

    if reduced.is_zero() {
        return Err(CurveError::NonInvertible);
    }

    let exponent = p - BigUint::from(2u8);
    Ok(reduced.modpow(&exponent, p))
}

/// Computes a square root of `a` modulo `p`, if one exists.
///
/// Uses the Tonelli-Shanks shortcut `a^((p+1)/4) mod p`, which is valid
/// only when `p ≡ 3 (mod 4)`; callers must check that congruence before
/// calling. The candidate root is verified by squaring, so a
/// quadratic non-residue yields `None` rather than a wrong root.
pub(crate) fn sqrt_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let reduced = a % p;
    let exponent = (p + BigUint::one()) >> 2;
    let root = reduced.modpow(&exponent, p);

    if (&root * &root) % p == reduced {
        Some(root)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_zero_is_rejected() {
        let p = BigUint::from(19u8);

        assert_eq!(inverse(&BigUint::zero(), &p), Err(CurveError::NonInvertible));
        assert_eq!(inverse(&p, &p), Err(CurveError::NonInvertible));
    }

    #[test]
    fn inverse_roundtrip() {
        let p = BigUint::from(19u8);

        for value in 1u8..19 {
            let a = BigUint::from(value);
            let inv = inverse(&a, &p).unwrap();

            assert_eq!((a * inv) % &p, BigUint::one());
        }
    }

    #[test]
    fn sqrt_finds_residues_and_rejects_non_residues() {
        // 19 ≡ 3 (mod 4); 5 is a residue (9² = 81 ≡ 5), 2 is not.
        let p = BigUint::from(19u8);

        let root = sqrt_mod(&BigUint::from(5u8), &p).unwrap();
        assert_eq!((&root * &root) % &p, BigUint::from(5u8));

        assert!(sqrt_mod(&BigUint::from(2u8), &p).is_none());
    }
}
