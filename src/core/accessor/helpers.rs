// src/core/accessor/helpers.rs

//! Single-step operations on one node of a `serde_json::Value` tree.
//!
//! Everything here looks at exactly one level: a node and one segment. The
//! walks in `get`, `set` and `delete` are built from these.

use crate::config::{AccessorConfig, ForbiddenKeyAction, NumericPolicy};
use crate::core::errors::DotPathError;
use crate::core::path::{MAX_INDEX_GAP, is_reserved_key, segment_index};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Looks up `segment` in `node`. Leaves (including `null`) have no children.
pub fn child<'a>(node: &'a Value, segment: &str, policy: NumericPolicy) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment_index(segment, policy)?),
        _ => None,
    }
}

/// Mutable counterpart of [`child`].
pub fn child_mut<'a>(
    node: &'a mut Value,
    segment: &str,
    policy: NumericPolicy,
) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => items.get_mut(segment_index(segment, policy)?),
        _ => None,
    }
}

/// Stores `value` under `segment` in `node` and returns the stored slot.
///
/// Sequences grow to fit the index, padding with `null`. Returns `None` when
/// `node` cannot hold `segment`: a leaf, a non-index segment on a sequence, or
/// an index more than [`MAX_INDEX_GAP`] slots past the end.
pub fn assign<'a>(
    node: &'a mut Value,
    segment: &str,
    value: Value,
    policy: NumericPolicy,
) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => Some(match map.entry(segment) {
            Entry::Occupied(mut slot) => {
                slot.insert(value);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(value),
        }),
        Value::Array(items) => {
            let index = segment_index(segment, policy)?;
            if index >= items.len() {
                if index - items.len() > MAX_INDEX_GAP {
                    return None;
                }
                items.resize(index.checked_add(1)?, Value::Null);
            }
            items[index] = value;
            items.get_mut(index)
        }
        _ => None,
    }
}

/// Removes `segment` from `node`, returning whether a value was removed.
///
/// Mapping entries are removed outright, keeping the order of the rest.
/// Sequence elements are replaced by `null` so later indices do not shift.
pub fn remove(node: &mut Value, segment: &str, policy: NumericPolicy) -> bool {
    match node {
        Value::Object(map) => map.shift_remove(segment).is_some(),
        Value::Array(items) => match segment_index(segment, policy).and_then(|i| items.get_mut(i)) {
            Some(slot) => !std::mem::take(slot).is_null(),
            None => false,
        },
        _ => false,
    }
}

/// Returns the child at `segment`, creating a container there first when
/// expansion applies.
///
/// A container is created when the slot is missing or holds a leaf. `null`
/// counts as a leaf only with `expand_over_null`. The new container is a
/// sequence if the following segment is numeric-looking, else a mapping.
pub fn ensure_child<'a>(
    node: &'a mut Value,
    segment: &str,
    next_is_numeric: bool,
    config: &AccessorConfig,
) -> Option<&'a mut Value> {
    let policy = config.numeric_segments;
    if config.is_expandable && needs_container(child(node, segment, policy), config.expand_over_null) {
        let fresh = if next_is_numeric {
            Value::Array(Vec::new())
        } else {
            Value::Object(Map::new())
        };
        trace!(segment, sequence = next_is_numeric, "auto-creating container");
        assign(node, segment, fresh, policy)?;
    }
    child_mut(node, segment, policy)
}

fn needs_container(slot: Option<&Value>, expand_over_null: bool) -> bool {
    match slot {
        None => true,
        Some(Value::Object(_)) | Some(Value::Array(_)) => false,
        Some(Value::Null) => expand_over_null,
        Some(_) => true,
    }
}

/// How a guarded walk proceeds past one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Proceed,
    Skip,
    Abort,
}

/// Checks a walk-path segment against the reserved keys.
pub fn guard_segment(
    config: &AccessorConfig,
    segment: &str,
    position: usize,
) -> Result<Guard, DotPathError> {
    if !config.prevent_prototype_keywords || !is_reserved_key(segment) {
        return Ok(Guard::Proceed);
    }
    if config.throw_errors {
        return Err(DotPathError::ForbiddenKey {
            key: segment.to_string(),
            position,
        });
    }
    match config.forbidden_key_action {
        ForbiddenKeyAction::Skip => {
            debug!(segment, position, "skipping prototype keyword");
            Ok(Guard::Skip)
        }
        ForbiddenKeyAction::Abort => {
            debug!(segment, position, "prototype keyword aborts operation");
            Ok(Guard::Abort)
        }
    }
}

/// Turns a failure into `Err` or absent, depending on `throw_errors`.
pub fn fail<T>(config: &AccessorConfig, err: impl Into<DotPathError>) -> Result<Option<T>, DotPathError> {
    if config.throw_errors {
        Err(err.into())
    } else {
        Ok(None)
    }
}
