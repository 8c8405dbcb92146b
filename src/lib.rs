// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::config::{AccessorConfig, ForbiddenKeyAction, NumericPolicy};
pub use crate::core::path::{
    MAX_INDEX_GAP, RESERVED_KEYS, is_numeric_segment, is_reserved_key, segment_index,
};
pub use crate::core::{DotAccessor, DotPath, DotPathError, PathResolutionError, create};
