// src/core/mod.rs

//! The central module containing path parsing, the accessor and its errors.

pub mod accessor;
pub mod errors;
pub mod path;

pub use accessor::{DotAccessor, create};
pub use errors::{DotPathError, PathResolutionError};
pub use path::DotPath;
