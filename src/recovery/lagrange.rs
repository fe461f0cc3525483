//! Exact Lagrange interpolation at zero.

use crate::exact::Fraction;
use num_bigint::BigInt;
use num_traits::One;
use std::collections::HashSet;
use thiserror::Error;

/// A single polynomial evaluation `(x, y)`.
///
/// The x-coordinate is the share's label (a small integer, non-zero in
/// any meaningful scheme since `f(0)` *is* the secret); the y-value is
/// the decoded share payload and may be arbitrarily large.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Share label (x-coordinate). Must be unique within a share set.
    pub x: i64,

    /// Polynomial value at `x`.
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }
}

/// Errors produced by [`interpolate_at_zero`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// The point set was empty.
    #[error("no points supplied")]
    NoPoints,

    /// Two points share an x-coordinate.
    ///
    /// Rejected up front: a repeated coordinate puts a zero factor into
    /// a Lagrange denominator, and the sum it would produce corresponds
    /// to no polynomial at all.
    #[error("duplicate x-coordinate {0} among supplied points")]
    DuplicateCoordinate(i64),

    /// The interpolated value at zero is not an integer.
    ///
    /// The points are mutually inconsistent with any integer-valued
    /// polynomial of degree below the point count, typically because a
    /// share is corrupted or the set mixes unrelated shares.
    #[error("interpolation at zero yielded non-integer value {0}/{1}")]
    NonIntegerResult(BigInt, BigInt),
}

/// Evaluates at `x = 0` the unique polynomial of degree `< k` passing
/// through the `k` supplied points, returning its (integer) constant
/// term.
///
/// The computation is the Lagrange form specialized to zero,
///
/// ```text
/// f(0) = Σᵢ yᵢ · ∏_{j≠i} (-xⱼ) / ∏_{j≠i} (xᵢ - xⱼ)
/// ```
///
/// with every term and partial sum carried as an exact reduced
/// [`Fraction`]. The result is independent of the order of `points`.
///
/// # Errors
///
/// - [`RecoveryError::NoPoints`] for an empty slice
/// - [`RecoveryError::DuplicateCoordinate`] if any x repeats
/// - [`RecoveryError::NonIntegerResult`] if the exact sum has a
///   denominator other than one
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, RecoveryError> {
    if points.is_empty() {
        return Err(RecoveryError::NoPoints);
    }

    let mut seen = HashSet::with_capacity(points.len());
    for p in points {
        if !seen.insert(p.x) {
            return Err(RecoveryError::DuplicateCoordinate(p.x));
        }
    }

    let mut acc = Fraction::zero();

    for (i, pi) in points.iter().enumerate() {
        let xi = BigInt::from(pi.x);
        let mut num = BigInt::from(1u8);
        let mut den = BigInt::from(1u8);

        for (j, pj) in points.iter().enumerate() {
            if j == i {
                continue;
            }

            let xj = BigInt::from(pj.x);
            num *= -&xj;
            den *= &xi - &xj;
        }

        let term = Fraction::new(num, den) * &pi.y;
        acc = acc + term;
    }

    let (numer, denom) = acc.into_parts();

    if !denom.is_one() {
        return Err(RecoveryError::NonIntegerResult(numer, denom));
    }

    Ok(numer)
}
