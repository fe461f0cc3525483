//! Exact rational arithmetic.
//!
//! Lagrange interpolation at zero produces intermediate values of the
//! form `p/q` with `q` generally greater than one; only the final sum
//! collapses back to an integer. Carrying those intermediates in
//! floating point (or truncating integer division) would silently
//! corrupt the reconstructed constant, so all interpolation arithmetic
//! in this crate runs on the [`Fraction`] type defined here.
//!
//! A `Fraction` is a numerator/denominator pair of arbitrary-precision
//! integers kept in canonical form at all times:
//!
//! - the denominator is strictly positive (sign lives in the numerator)
//! - numerator and denominator are coprime
//!
//! Canonical form is restored after every operation, so equality of
//! representations coincides with equality of values for all fractions
//! produced by this module.
//!
//! This module is arithmetic only: it knows nothing about shares,
//! thresholds, or polynomials. Those concerns live in [`crate::recovery`].

mod fraction;

pub use fraction::Fraction;
