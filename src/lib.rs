//! Threshold secret reconstruction from encoded shares.
//!
//! This crate recovers a hidden integer constant from a threshold set
//! of polynomial shares, the reconstruction half of Shamir-style secret
//! sharing: a secret is the constant term of a polynomial of degree
//! `k - 1`, and any `k` evaluations of that polynomial determine it
//! exactly via Lagrange interpolation at zero.
//!
//! The focus is on **exactness**: all arithmetic runs on
//! arbitrary-precision integers and reduced fractions, so the result is
//! either the true constant term or a typed error, never a rounded
//! approximation.
//!
//! # Module overview
//!
//! - `radix`
//!   Strict positional decoding of digit strings in bases 2 through 36
//!   into arbitrary-precision integers. Shares arrive with their
//!   y-values encoded this way.
//!
//! - `exact`
//!   Exact fraction arithmetic over `BigInt`: a canonical
//!   numerator/denominator pair, always reduced, always with a positive
//!   denominator. This is the substrate the interpolator runs on, since
//!   intermediate Lagrange terms are genuine rationals even when the
//!   final result is an integer.
//!
//! - `recovery`
//!   The interpolation core: given `k` points with distinct
//!   x-coordinates, evaluates the unique interpolating polynomial at
//!   zero and returns its integer constant term. Inconsistent or
//!   duplicated points are rejected with typed errors.
//!
//! - `cases`
//!   The batch layer: parses a JSON document of test cases (threshold
//!   descriptor plus labeled share entries), selects the first `k`
//!   shares by ascending coordinate, decodes them, and runs recovery
//!   for each case in input order.
//!
//! # Design goals
//!
//! - Exact arithmetic end to end; no floating point anywhere
//! - Pure, stateless computation; all I/O stays in the binary
//! - Strict input validation with typed, per-surface errors
//! - Minimal and explicit APIs
//!
//! The scheme is treated as plain mathematics: this crate makes no
//! attempt to harden reconstruction against malicious shareholders or
//! to protect share confidentiality in memory.

pub mod cases;
pub mod exact;
pub mod radix;
pub mod recovery;
