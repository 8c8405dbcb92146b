// src/core/accessor/delete.rs

use super::DotAccessor;
use super::helpers::{self, Guard};
use crate::core::errors::DotPathError;
use crate::core::path::DotPath;
use serde_json::Value;
use std::borrow::BorrowMut;
use tracing::debug;

impl<T: BorrowMut<Value>> DotAccessor<T> {
    /// Removes the value at `path`.
    ///
    /// Returns `Some(true)` if something was removed and `Some(false)` if the
    /// final key was already missing. Intermediate segments are never
    /// created; one that does not resolve is an error (or absent).
    /// Sequence elements are replaced by `null` rather than shifted out.
    pub fn delete(&mut self, path: &str) -> Result<Option<bool>, DotPathError> {
        if self.config.is_immutable {
            debug!(path, "delete refused on immutable accessor");
            return Ok(None);
        }
        let path = DotPath::parse(path, &self.config);
        let config = &self.config;
        let policy = config.numeric_segments;
        let (walk, target_key) = path.split_target();

        let mut current: &mut Value = self.target.borrow_mut();
        for (i, segment) in walk.iter().enumerate() {
            match helpers::guard_segment(config, segment, i)? {
                Guard::Proceed => {}
                Guard::Skip => continue,
                Guard::Abort => return Ok(None),
            }
            current = match helpers::child_mut(current, segment, policy) {
                Some(next) => next,
                None => return helpers::fail(config, path.resolution_error(i)),
            };
        }
        Ok(Some(helpers::remove(current, target_key, policy)))
    }
}
