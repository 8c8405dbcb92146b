// src/core/errors.rs

//! Defines the error type returned by every accessor operation.

use thiserror::Error;

/// The main error enum, representing every way a path operation can fail.
///
/// These are only ever returned when the accessor was configured with
/// `throw_errors = true`. Otherwise the same failures surface as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// A segment could not be resolved (or created) while walking the path.
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),

    /// A prototype-sensitive key appeared in a guarded walk.
    #[error("prototype keyword \"{key}\" disallowed")]
    ForbiddenKey { key: String, position: usize },
}

impl DotPathError {
    /// Returns the zero-based segment position the error refers to.
    pub fn position(&self) -> usize {
        match self {
            DotPathError::PathResolution(e) => e.position,
            DotPathError::ForbiddenKey { position, .. } => *position,
        }
    }
}

/// Diagnostic for a segment that did not resolve.
///
/// The rendered message is three lines: the failing segment (and its parent
/// path, if any), the full normalized path, and a caret under the segment.
///
/// ```text
/// invalid target "x" in "a.b"
/// a.b.x.y
///     ^
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid target \"{segment}\"{}\n{path}\n{}^", parent_suffix(.path, .offset), caret_padding(.path, .offset))]
pub struct PathResolutionError {
    /// The segment text as it appeared in the path.
    pub segment: String,
    /// Zero-based index of the segment among all path segments.
    pub position: usize,
    /// The full normalized path (prefix and suffix applied).
    pub path: String,
    /// Byte offset of the segment's first character within `path`.
    pub offset: usize,
}

impl PathResolutionError {
    pub fn new(segment: impl Into<String>, position: usize, path: impl Into<String>, offset: usize) -> Self {
        Self {
            segment: segment.into(),
            position,
            path: path.into(),
            offset,
        }
    }

    /// Character column of the segment within `path`, where the caret is drawn.
    pub fn column(&self) -> usize {
        column_of(&self.path, self.offset)
    }

    /// The part of the path that resolved successfully before this segment.
    pub fn parent_path(&self) -> &str {
        parent_of(&self.path, self.offset)
    }
}

fn parent_of(path: &str, offset: usize) -> &str {
    // The parent ends right before the '.' that precedes the segment.
    path.get(..offset.saturating_sub(1)).unwrap_or_default()
}

fn parent_suffix(path: &str, offset: &usize) -> String {
    if *offset == 0 {
        String::new()
    } else {
        format!(" in \"{}\"", parent_of(path, *offset))
    }
}

fn column_of(path: &str, offset: usize) -> usize {
    path.get(..offset).map_or(offset, |head| head.chars().count())
}

fn caret_padding(path: &str, offset: &usize) -> String {
    " ".repeat(column_of(path, *offset))
}
