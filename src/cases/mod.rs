//! Test-case input model and batch recovery.
//!
//! The utility consumes a JSON document holding either a single test
//! case or an ordered array of them. A test case is an object with one
//! reserved field and any number of share entries:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "10", "value": "7" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "10", "value": "39" }
//! }
//! ```
//!
//! `keys` describes the scheme: `n` shares exist in total and any `k`
//! of them suffice for reconstruction. Every other field is a share:
//! its key is the x-coordinate as a decimal label, its value carries
//! the radix and digit string of the y-value. Labels are sorted by
//! numeric value and the first `k` shares are used; surplus shares are
//! ignored. `n`, `k`, and `base` may each be a JSON number or a numeric
//! string.
//!
//! Because share entries are sibling fields of `keys` under arbitrary
//! labels, the outer object is navigated as [`serde_json::Value`];
//! the fixed-shape `keys` and share payloads deserialize into typed
//! structs.
//!
//! ## Failure policy
//!
//! - A document that is neither a test-case object nor an array is
//!   malformed: the whole run fails.
//! - A test case without a usable `keys` descriptor is logged and
//!   skipped; remaining cases still run and no output line is produced
//!   for it.
//! - Everything else (unparseable share entries, non-numeric labels,
//!   fewer than `k` shares, undecodable values, duplicate coordinates,
//!   a non-integer reconstruction) indicates corrupted input and fails
//!   the run. Reconstruction is deterministic, so nothing is retried.

use crate::radix::{self, RadixError};
use crate::recovery::{self, Point, RecoveryError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Reserved field naming the threshold descriptor inside a test case.
const KEYS_FIELD: &str = "keys";

/// Errors that fail a whole run.
///
/// The skippable condition (a test case without a threshold
/// descriptor) never surfaces here; it is logged inside
/// [`recover_all`] and the case is dropped.
#[derive(Debug, Error)]
pub enum CaseError {
    /// The document is not valid JSON, or its top-level value is
    /// neither a test-case object nor an array of test cases.
    #[error("input is not a test case object or an array of test cases")]
    MalformedInput,

    /// A share's label does not parse as an integer coordinate.
    #[error("test case {index}: share label {label:?} is not numeric")]
    InvalidLabel { index: usize, label: String },

    /// A share entry is not a `{base, value}` object.
    #[error("test case {index}: malformed share {label:?}: {reason}")]
    MalformedShare {
        index: usize,
        label: String,
        reason: String,
    },

    /// Fewer shares were provided than the threshold requires.
    #[error("test case {index}: threshold {required} exceeds the {available} provided shares")]
    NotEnoughShares {
        index: usize,
        required: usize,
        available: usize,
    },

    /// A share value could not be decoded in its declared base.
    #[error("test case {index}, share {label}: {source}")]
    Decode {
        index: usize,
        label: i64,
        #[source]
        source: RadixError,
    },

    /// Interpolation rejected the selected shares.
    #[error("test case {index}: {source}")]
    Recovery {
        index: usize,
        #[source]
        source: RecoveryError,
    },
}

/// Threshold descriptor of a test case.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Threshold {
    /// Total number of shares issued. Informational only; selection is
    /// driven by `k` and the shares actually present.
    #[serde(deserialize_with = "int_like")]
    pub n: usize,

    /// Number of shares required for reconstruction.
    #[serde(deserialize_with = "int_like")]
    pub k: usize,
}

/// A single encoded share payload.
#[derive(Clone, Debug, Deserialize)]
pub struct ShareEntry {
    /// Radix of `value`, `2..=36`.
    #[serde(deserialize_with = "int_like")]
    pub base: u32,

    /// Digit string of the y-value in the given base.
    pub value: String,
}

/// Accepts a JSON number or a numeric string for integer-like fields.
fn int_like<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    <T as FromStr>::Err: Display,
    <T as TryFrom<u64>>::Error: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(de)? {
        Raw::Number(v) => T::try_from(v).map_err(serde::de::Error::custom),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Splits a parsed document into its test cases, in input order.
///
/// A top-level array is taken as-is; a top-level object must carry a
/// `keys` field to count as a single test case. Anything else is
/// [`CaseError::MalformedInput`].
pub fn split_cases(document: Value) -> Result<Vec<Value>, CaseError> {
    match document {
        Value::Array(cases) => Ok(cases),
        Value::Object(obj) if obj.contains_key(KEYS_FIELD) => Ok(vec![Value::Object(obj)]),
        _ => Err(CaseError::MalformedInput),
    }
}

/// Parses a JSON document and splits it into test cases.
pub fn parse_cases(text: &str) -> Result<Vec<Value>, CaseError> {
    let document: Value = serde_json::from_str(text).map_err(|_| CaseError::MalformedInput)?;
    split_cases(document)
}

/// Reconstructs the secret of every test case, in input order.
///
/// Returns one decimal string per recovered secret. Cases without a
/// usable threshold descriptor are logged and skipped, contributing no
/// entry; any other failure aborts the run with a [`CaseError`].
pub fn recover_all(cases: &[Value]) -> Result<Vec<String>, CaseError> {
    let mut secrets = Vec::with_capacity(cases.len());

    for (index, case) in cases.iter().enumerate() {
        match recover_case(index, case)? {
            Some(secret) => secrets.push(secret),
            None => continue,
        }
    }

    Ok(secrets)
}

/// Runs a single test case. `Ok(None)` means the case was skipped.
fn recover_case(index: usize, case: &Value) -> Result<Option<String>, CaseError> {
    let Some(obj) = case.as_object() else {
        warn!(index, "skipping test case: not an object");
        return Ok(None);
    };

    let threshold = match obj.get(KEYS_FIELD) {
        Some(raw) => match serde_json::from_value::<Threshold>(raw.clone()) {
            Ok(t) => t,
            Err(reason) => {
                warn!(index, %reason, "skipping test case: unusable threshold descriptor");
                return Ok(None);
            }
        },
        None => {
            warn!(index, "skipping test case: missing threshold descriptor");
            return Ok(None);
        }
    };

    debug!(index, n = threshold.n, k = threshold.k, "recovering test case");

    let mut shares: Vec<(i64, ShareEntry)> = Vec::with_capacity(obj.len().saturating_sub(1));

    for (label, raw) in obj {
        if label == KEYS_FIELD {
            continue;
        }

        let x: i64 = label.trim().parse().map_err(|_| CaseError::InvalidLabel {
            index,
            label: label.clone(),
        })?;

        let entry =
            serde_json::from_value::<ShareEntry>(raw.clone()).map_err(|e| {
                CaseError::MalformedShare {
                    index,
                    label: label.clone(),
                    reason: e.to_string(),
                }
            })?;

        shares.push((x, entry));
    }

    if shares.len() < threshold.k {
        return Err(CaseError::NotEnoughShares {
            index,
            required: threshold.k,
            available: shares.len(),
        });
    }

    // First k shares by ascending coordinate; the rest are surplus.
    shares.sort_by_key(|(x, _)| *x);
    shares.truncate(threshold.k);

    let mut points = Vec::with_capacity(shares.len());
    for (x, entry) in &shares {
        let y = radix::decode(&entry.value, entry.base).map_err(|source| CaseError::Decode {
            index,
            label: *x,
            source,
        })?;

        points.push(Point { x: *x, y });
    }

    let secret = recovery::interpolate_at_zero(&points)
        .map_err(|source| CaseError::Recovery { index, source })?;

    Ok(Some(secret.to_string()))
}
