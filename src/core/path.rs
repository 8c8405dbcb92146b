// src/core/path.rs

//! Path normalization and segment classification.
//!
//! A raw key such as `"..c.cA"` is normalized (leading dots removed, prefix and
//! suffix applied) and split on `.` into segments. Whether a segment addresses a
//! sequence slot is decided by a single predicate driven by [`NumericPolicy`].

use crate::config::{AccessorConfig, NumericPolicy};
use crate::core::errors::PathResolutionError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Keys that would corrupt shared object behavior if treated as plain data keys.
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// How far past the end of a sequence a write may land. Slots in between are
/// padded with `null`; anything further is an unresolvable segment.
pub const MAX_INDEX_GAP: usize = 10_000;

static STRICT_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("strict index pattern is valid"));

/// Returns true if `segment` is one of the [`RESERVED_KEYS`].
pub fn is_reserved_key(segment: &str) -> bool {
    RESERVED_KEYS.contains(&segment)
}

/// Returns true if `segment` looks like a sequence index under `policy`.
pub fn is_numeric_segment(segment: &str, policy: NumericPolicy) -> bool {
    match policy {
        NumericPolicy::Strict => STRICT_INDEX.is_match(segment),
        NumericPolicy::Permissive => parse_permissive(segment).is_some(),
    }
}

/// Converts `segment` into a sequence index, if it names one under `policy`.
///
/// Numeric-looking segments that are negative, fractional, or too large for
/// `usize` are not indices.
pub fn segment_index(segment: &str, policy: NumericPolicy) -> Option<usize> {
    match policy {
        NumericPolicy::Strict => {
            if STRICT_INDEX.is_match(segment) {
                segment.parse::<usize>().ok()
            } else {
                None
            }
        }
        NumericPolicy::Permissive => {
            let trimmed = segment.trim_ascii();
            if trimmed.is_empty() {
                return None;
            }
            let n = parse_permissive(trimmed)?;
            if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
                Some(n as usize)
            } else {
                None
            }
        }
    }
}

// Accepts what a loose "is not NaN" check would: surrounding whitespace,
// floats, exponents, infinities and the empty string (which counts as zero).
fn parse_permissive(segment: &str) -> Option<f64> {
    let trimmed = segment.trim_ascii();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust's float parser also takes "inf" and "nan", which are not numbers here.
    if trimmed.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// A normalized, split path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    normalized: String,
    segments: Vec<String>,
}

impl DotPath {
    /// Normalizes `raw` according to `config` and splits it into segments.
    ///
    /// An empty normalized path yields a single empty segment, which `get`
    /// interprets as the root.
    pub fn parse(raw: &str, config: &AccessorConfig) -> Self {
        let key = if config.remove_leading_dots {
            raw.trim_start_matches('.')
        } else {
            raw
        };
        let normalized = format!("{}{}{}", config.prefix, key, config.suffix);
        let segments = normalized.split('.').map(str::to_string).collect();
        Self {
            normalized,
            segments,
        }
    }

    /// The path after leading-dot removal and prefix/suffix wrapping.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the normalized path is empty, i.e. it names the root.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].is_empty()
    }

    /// Splits into the walk path and the final (target) key.
    pub fn split_target(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, walk)) => (walk, last.as_str()),
            None => (&[], ""),
        }
    }

    /// Byte offset of segment `position` inside [`DotPath::normalized`].
    pub fn offset_of(&self, position: usize) -> usize {
        self.segments[..position.min(self.segments.len())]
            .iter()
            .map(|s| s.len() + 1)
            .sum()
    }

    /// Builds the diagnostic for a segment that failed to resolve.
    pub fn resolution_error(&self, position: usize) -> PathResolutionError {
        let segment = self.segments.get(position).cloned().unwrap_or_default();
        PathResolutionError::new(segment, position, self.normalized.clone(), self.offset_of(position))
    }
}
