//! Canonical-form fraction over arbitrary-precision integers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Mul};

/// An exact rational number.
///
/// Invariants, upheld by every constructor and operation:
///
/// - the denominator is positive (any sign is carried by the numerator)
/// - numerator and denominator share no factor other than 1
///
/// The degenerate pair `0/0` cannot be produced through this API; the
/// reduction path guards against it all the same so that a zero
/// denominator never turns into a division by zero.
#[derive(Clone, Debug)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// The fraction `0/1`, the additive identity.
    pub fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// Builds a fraction from a numerator/denominator pair, reducing it
    /// to canonical form.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        Self::reduce(numer, denom)
    }

    /// Reduces a raw pair to canonical form.
    ///
    /// A negative denominator is first normalized by negating both
    /// components, then both are divided by their greatest common
    /// divisor. `gcd(0, 0)` is zero; in that degenerate case the pair
    /// is passed through unchanged rather than divided.
    fn reduce(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        let g = numer.abs().gcd(&denom);

        if !g.is_zero() {
            numer /= &g;
            denom /= &g;
        }

        Self { numer, denom }
    }

    /// Returns true if the fraction has denominator 1, i.e. represents
    /// an exact integer.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Consumes the fraction, returning `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }
}

impl From<BigInt> for Fraction {
    /// Promotes an integer to the fraction `n/1`.
    fn from(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }
}

/// Fraction addition by cross multiplication:
/// `n1/d1 + n2/d2 = (n1·d2 + n2·d1) / (d1·d2)`, re-reduced.
impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        let denom = self.denom * rhs.denom;

        Self::reduce(numer, denom)
    }
}

/// Scaling by an integer: `(n/d) · s = (n·s)/d`, re-reduced.
impl Mul<&BigInt> for Fraction {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        Self::reduce(self.numer * rhs, self.denom)
    }
}

/// Value equality.
///
/// Because both sides are canonical, comparing components is the same
/// as comparing cross products.
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }
}

impl Eq for Fraction {}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
