// src/config.rs

//! Accessor configuration: defaults, named policies, TOML loading and validation.

use crate::core::path::RESERVED_KEYS;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Decides which segments are treated as sequence indices.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NumericPolicy {
    /// Only plain ASCII digit runs (`^[0-9]+$`).
    #[default]
    Strict,
    /// Anything a loose "not NaN" check accepts: surrounding whitespace,
    /// floats, exponents and the empty string. Only non-negative integral
    /// values can actually index a sequence.
    Permissive,
}

/// What a guarded walk does with a reserved key when errors are not thrown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ForbiddenKeyAction {
    /// Drop the segment and keep walking from the current node.
    #[default]
    Skip,
    /// Abandon the whole operation and return absent.
    Abort,
}

/// Per-accessor settings, fixed at construction and consulted on every call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessorConfig {
    /// When true, `set` and `delete` do nothing and return absent.
    #[serde(default)]
    pub is_immutable: bool,
    /// Whether missing intermediate containers and new final keys may be created.
    #[serde(default = "default_true")]
    pub is_expandable: bool,
    /// Return errors instead of absent on invalid access or expansion.
    #[serde(default = "default_true")]
    pub throw_errors: bool,
    /// Guard write and delete walks against `__proto__`, `constructor` and `prototype`.
    #[serde(default = "default_true")]
    pub prevent_prototype_keywords: bool,
    /// Strip leading `.` characters from every key (`".a.b"` becomes `"a.b"`).
    #[serde(default = "default_true")]
    pub remove_leading_dots: bool,
    /// Prepended to every key after leading-dot removal.
    #[serde(default)]
    pub prefix: String,
    /// Appended to every key.
    #[serde(default)]
    pub suffix: String,
    /// Replace `null` intermediates with fresh containers during expansion.
    #[serde(default)]
    pub expand_over_null: bool,
    /// Which segments count as sequence indices.
    #[serde(default)]
    pub numeric_segments: NumericPolicy,
    /// Skip or abort on a reserved key in a guarded walk when errors are not thrown.
    #[serde(default)]
    pub forbidden_key_action: ForbiddenKeyAction,
}

fn default_true() -> bool {
    true
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            is_immutable: false,
            is_expandable: default_true(),
            throw_errors: default_true(),
            prevent_prototype_keywords: default_true(),
            remove_leading_dots: default_true(),
            prefix: String::new(),
            suffix: String::new(),
            expand_over_null: false,
            numeric_segments: NumericPolicy::default(),
            forbidden_key_action: ForbiddenKeyAction::default(),
        }
    }
}

impl AccessorConfig {
    /// Parses a configuration from a TOML document and validates it.
    ///
    /// Missing keys take their defaults, so an empty document is valid.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AccessorConfig =
            toml::from_str(contents).context("Failed to parse accessor config from TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.prevent_prototype_keywords {
            for (name, affix) in [("prefix", &self.prefix), ("suffix", &self.suffix)] {
                if let Some(key) = affix.split('.').find(|s| RESERVED_KEYS.contains(s)) {
                    return Err(anyhow!(
                        "{name} contains prototype keyword \"{key}\" while prevent_prototype_keywords is enabled"
                    ));
                }
            }
        }
        Ok(())
    }

    /// Shorthand for a config that never throws and returns absent instead.
    pub fn lenient() -> Self {
        Self {
            throw_errors: false,
            ..Self::default()
        }
    }
}
