//! Core elliptic-curve types and the group law.
//!
//! This module defines the immutable point representation, the curve
//! parameters, and the cyclic group description used by every
//! asymmetric scheme in the crate.
//!
//! The curve is given in short Weierstrass form `y² = x³ + ax + b` over
//! the prime field F_p. The group law follows the textbook affine
//! formulas: chord addition for distinct points, tangent doubling, and
//! a distinguished identity element (the point at infinity). Scalar
//! multiplication processes the scalar's bits from least to most
//! significant with the double-and-add method.
//!
//! Points are value types. No operation mutates a point in place;
//! negation and every group operation construct fresh points, so
//! results can never alias their operands.

use num_bigint::BigUint;
use num_traits::Zero;

use super::field;

/// Errors produced by curve and scalar domain violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The coordinates do not satisfy the curve equation, or are not
    /// reduced modulo the field prime.
    NotOnCurve,

    /// A field inversion was attempted on a zero residue.
    NonInvertible,

    /// A scalar lies outside the range required by the operation.
    ScalarOutOfRange,
}

/// A point on an elliptic curve over a prime field.
///
/// The identity element is represented explicitly as
/// [`Point::Infinity`]; every other point carries affine coordinates
/// reduced modulo the field prime.
///
/// Points are immutable values: operations that conceptually modify a
/// point (negation, addition) return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity (group identity).
    Infinity,

    /// An affine point with coordinates in `[0, p-1]`.
    Affine {
        /// x-coordinate.
        x: BigUint,
        /// y-coordinate.
        y: BigUint,
    },
}

impl Point {
    /// Returns `true` if this is the identity element.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Returns the affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// Returns the affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

/// Short Weierstrass curve parameters over F_p.
///
/// The parameters are plain data supplied by the caller. `p` must be an
/// odd prime and `a`, `b` must be reduced modulo `p`; neither property
/// is (or can cheaply be) verified here, and arithmetic over a
/// composite modulus is undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl Curve {
    /// Creates a curve `y² = x³ + ax + b` over F_p.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Self {
        Self { p, a, b }
    }

    /// Field prime.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Evaluates the curve polynomial `x³ + ax + b mod p`.
    pub(crate) fn rhs(&self, x: &BigUint) -> BigUint {
        (x.modpow(&BigUint::from(3u8), &self.p) + &self.a * x + &self.b) % &self.p
    }

    /// Returns `true` if the point satisfies the curve equation with
    /// canonical (reduced) coordinates. The identity is always on the
    /// curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                x < &self.p && y < &self.p && (y * y) % &self.p == self.rhs(x)
            }
        }
    }

    /// Constructs a validated affine point.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NotOnCurve`] if the coordinates are not
    /// reduced modulo `p` or do not satisfy the curve equation.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point, CurveError> {
        let candidate = Point::Affine { x, y };

        if self.is_on_curve(&candidate) {
            Ok(candidate)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Returns the negation of a point as a new value.
    ///
    /// The negation of `(x, y)` is `(x, (p - y) mod p)`; the identity
    /// is its own negation.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: field::sub_mod(&BigUint::zero(), y, &self.p),
            },
        }
    }

    /// Adds two points with the affine group law.
    ///
    /// - If either operand is the identity, the other is returned.
    /// - Two points sharing an x-coordinate but not a y-coordinate are
    ///   negations of each other; their sum is the identity.
    /// - Doubling a point with `y = 0` yields the identity (vertical
    ///   tangent).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonInvertible`] if a slope denominator is
    /// zero modulo `p`. Canonical on-curve operands never trigger this;
    /// it indicates hand-built, non-canonical input.
    pub fn add(&self, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
        let (x1, y1) = match p1 {
            Point::Infinity => return Ok(p2.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match p2 {
            Point::Infinity => return Ok(p1.clone()),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 != y2 {
            return Ok(Point::Infinity);
        }

        let lambda = if x1 == x2 {
            // Doubling; a zero y-coordinate means a vertical tangent.
            if y1.is_zero() {
                return Ok(Point::Infinity);
            }

            let numerator = (BigUint::from(3u8) * x1 * x1 + &self.a) % &self.p;
            let denominator = (BigUint::from(2u8) * y1) % &self.p;
            (numerator * field::inverse(&denominator, &self.p)?) % &self.p
        } else {
            let numerator = field::sub_mod(y2, y1, &self.p);
            let denominator = field::sub_mod(x2, x1, &self.p);
            (numerator * field::inverse(&denominator, &self.p)?) % &self.p
        };

        let x3 = {
            let squared = (&lambda * &lambda) % &self.p;
            field::sub_mod(&field::sub_mod(&squared, x1, &self.p), x2, &self.p)
        };
        let y3 = {
            let chord = (&lambda * field::sub_mod(x1, &x3, &self.p)) % &self.p;
            field::sub_mod(&chord, y1, &self.p)
        };

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Doubles a point.
    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        self.add(point, point)
    }

    /// Computes the scalar multiple `k · P` with double-and-add.
    ///
    /// The scalar's bits are consumed from least to most significant:
    /// the accumulator starts at the identity and the addend at `P`;
    /// each set bit folds the current addend into the accumulator
    /// before the addend is doubled. `k = 0` yields the identity.
    ///
    /// Scalars are unsigned by construction; callers working with
    /// signed values must normalize into `[0, n-1]` first.
    pub fn multiply(&self, k: &BigUint, point: &Point) -> Result<Point, CurveError> {
        let mut result = Point::Infinity;
        let mut addend = point.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.bit(0) {
                result = self.add(&result, &addend)?;
            }
            addend = self.add(&addend, &addend)?;
            k >>= 1;
        }

        Ok(result)
    }
}

/// The cyclic subgroup used for key and scalar operations.
///
/// Bundles the curve, a generator point, and the exact order `n` of
/// that generator. All private scalars are drawn from `[1, n-1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveGroup {
    curve: Curve,
    generator: Point,
    order: BigUint,
}

impl CurveGroup {
    /// Creates a group description from its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NotOnCurve`] if the generator does not lie
    /// on the curve, and [`CurveError::ScalarOutOfRange`] if the order
    /// is zero.
    pub fn new(curve: Curve, generator: Point, order: BigUint) -> Result<Self, CurveError> {
        if !curve.is_on_curve(&generator) {
            return Err(CurveError::NotOnCurve);
        }

        if order.is_zero() {
            return Err(CurveError::ScalarOutOfRange);
        }

        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    /// The underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The subgroup generator.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The exact order of the generator.
    pub fn order(&self) -> &BigUint {
        &self.order
    }
}
