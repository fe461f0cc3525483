//! Threshold secret reconstruction.
//!
//! A secret integer hidden as the constant term of a polynomial of
//! degree `k - 1` is recovered from any `k` evaluations of that
//! polynomial. This module implements the reconstruction side of that
//! scheme: given `k` points `(x, y)` with pairwise distinct `x`, it
//! evaluates the unique interpolating polynomial at zero and returns
//! the constant term.
//!
//! Unlike field-based Shamir implementations, which work modulo a prime
//! or in GF(2⁸), this reconstruction runs over the integers themselves.
//! Intermediate Lagrange terms are therefore genuine rationals, carried
//! exactly by [`crate::exact::Fraction`]; for any consistent input the
//! final sum has denominator one and is returned as a `BigInt`.
//!
//! ## Provided functionality
//!
//! - [`Point`]
//!   A single share: a small x-coordinate and an arbitrary-precision
//!   y-value.
//!
//! - [`interpolate_at_zero`]
//!   Exact Lagrange interpolation of a point set at `x = 0`.
//!
//! ## Validation
//!
//! Inputs that cannot belong to any well-formed share set are rejected
//! before arithmetic begins:
//!
//! - an empty point set
//! - two points with the same x-coordinate (which would place a zero
//!   factor in a Lagrange denominator)
//!
//! A point set that passes validation but does not lie on a single
//! integer-valued polynomial yields a non-integer sum and is reported
//! as [`RecoveryError::NonIntegerResult`] rather than rounded.

mod lagrange;

pub use lagrange::{Point, RecoveryError, interpolate_at_zero};
