// src/core/accessor/set.rs

use super::DotAccessor;
use super::helpers::{self, Guard};
use crate::core::errors::DotPathError;
use crate::core::path::{DotPath, is_numeric_segment};
use serde_json::Value;
use std::borrow::BorrowMut;
use tracing::debug;

impl<T: BorrowMut<Value>> DotAccessor<T> {
    /// Stores `value` at `path`, creating intermediate containers when the
    /// accessor is expandable.
    ///
    /// Returns a borrow of the stored value. An immutable accessor stores
    /// nothing and returns `Ok(None)`. Containers created before a failing
    /// segment are left in place.
    pub fn set(&mut self, path: &str, value: Value) -> Result<Option<&Value>, DotPathError> {
        if self.config.is_immutable {
            debug!(path, "set refused on immutable accessor");
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
            let next_is_numeric = is_numeric_segment(&path.segments()[i + 1], policy);
            current = match helpers::ensure_child(current, segment, next_is_numeric, config) {
                Some(next) => next,
                None => return helpers::fail(config, path.resolution_error(i)),
            };
        }

        let position = walk.len();
        if !config.is_expandable && helpers::child(current, target_key, policy).is_none() {
            return helpers::fail(config, path.resolution_error(position));
        }
        match helpers::assign(current, target_key, value, policy) {
            Some(stored) => Ok(Some(&*stored)),
            None => helpers::fail(config, path.resolution_error(position)),
        }
    }
}
