// src/core/accessor/get.rs

use super::DotAccessor;
use super::helpers::{child, child_mut, fail};
use crate::core::errors::DotPathError;
use crate::core::path::DotPath;
use serde_json::Value;
use std::borrow::{Borrow, BorrowMut};
use tracing::debug;

impl<T: Borrow<Value>> DotAccessor<T> {
    /// Reads the value at `path`.
    ///
    /// The empty path returns the root. A segment that does not resolve
    /// yields a [`DotPathError::PathResolution`] or, with `throw_errors`
    /// disabled, `Ok(None)`. Never mutates the target.
    pub fn get(&self, path: &str) -> Result<Option<&Value>, DotPathError> {
        let path = DotPath::parse(path, &self.config);
        let policy = self.config.numeric_segments;

        let mut current: &Value = self.target.borrow();
        if path.is_root() {
            return Ok(Some(current));
        }
        for (i, segment) in path.segments().iter().enumerate() {
            current = match child(current, segment, policy) {
                Some(next) => next,
                None => return fail(&self.config, path.resolution_error(i)),
            };
        }
        Ok(Some(current))
    }
}

impl<T: BorrowMut<Value>> DotAccessor<T> {
    /// Like [`DotAccessor::get`], but hands out a mutable borrow.
    ///
    /// Nothing is created along the way. An immutable accessor returns `Ok(None)`.
    pub fn get_mut(&mut self, path: &str) -> Result<Option<&mut Value>, DotPathError> {
        if self.config.is_immutable {
            debug!(path, "get_mut refused on immutable accessor");
            return Ok(None);
        }
        let path = DotPath::parse(path, &self.config);
        let policy = self.config.numeric_segments;

        let mut current: &mut Value = self.target.borrow_mut();
        if path.is_root() {
            return Ok(Some(current));
        }
        for (i, segment) in path.segments().iter().enumerate() {
            current = match child_mut(current, segment, policy) {
                Some(next) => next,
                None => return fail(&self.config, path.resolution_error(i)),
            };
        }
        Ok(Some(current))
    }
}
