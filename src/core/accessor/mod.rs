// src/core/accessor/mod.rs

//! The path accessor: a thin wrapper around a caller-owned `serde_json::Value`
//! that reads, writes and deletes nested values by dot-delimited path.
//!
//! The accessor is generic over how the target is held. Anything that
//! borrows as a `Value` can be read; anything that borrows mutably can also
//! be written to.
//!
//! ```
//! use dotpath::{AccessorConfig, create};
//! use serde_json::json;
//!
//! let mut data = json!({"a": 1, "b": 2});
//! let mut dot = create(&mut data, AccessorConfig::default());
//!
//! dot.set("c.cA", json!(true)).unwrap();
//! dot.set("d.0.a", json!("test")).unwrap();
//!
//! assert_eq!(dot.get("a").unwrap(), Some(&json!(1)));
//! assert_eq!(data, json!({"a": 1, "b": 2, "c": {"cA": true}, "d": [{"a": "test"}]}));
//! ```

mod delete;
mod get;
mod helpers;
mod set;

use crate::config::AccessorConfig;
use serde_json::Value;
use std::borrow::Borrow;

/// Wraps a target structure together with the configuration that governs
/// every access to it.
#[derive(Debug, Clone)]
pub struct DotAccessor<T> {
    target: T,
    config: AccessorConfig,
}

/// Creates an accessor around `target`.
pub fn create<T: Borrow<Value>>(target: T, config: AccessorConfig) -> DotAccessor<T> {
    DotAccessor::with_config(target, config)
}

impl<T: Borrow<Value>> DotAccessor<T> {
    /// Creates an accessor with the default configuration.
    pub fn new(target: T) -> Self {
        Self::with_config(target, AccessorConfig::default())
    }

    pub fn with_config(target: T, config: AccessorConfig) -> Self {
        Self { target, config }
    }

    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    /// Borrows the wrapped target.
    pub fn target(&self) -> &Value {
        self.target.borrow()
    }

    /// Releases the wrapper and hands back whatever it was holding.
    pub fn into_inner(self) -> T {
        self.target
    }
}
