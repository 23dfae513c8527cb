//! Reconciliation keys for shorthand-created nodes.
//!
//! Derived keys are pure functions of the shorthand value and its position,
//! so resolving an unchanged collection twice yields the same keys. Within
//! one collection every derived key is made unique, including against
//! explicit keys that appear later in the collection; explicit keys are
//! never rewritten.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::props::Props;

/// How a key is derived when the shorthand does not carry one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Position plus a content fingerprint: `"<index>-<hash>"` for
    /// configurations and `"<index>-<value>"` for primitives. Without a
    /// position only the second half is used.
    #[default]
    Positional,
    /// The listed fields of a configuration joined with `-`, e.g.
    /// `header-description`. An unset field leaves an empty slot, so a
    /// header-only card keys as `"A-"`. Falls back to
    /// [`KeyStrategy::Positional`] when none of the fields are set.
    Fields(&'static [&'static str]),
}

/// First eight hex digits of the blake3 hash of the value's JSON form.
///
/// [`Props`] serialize with sorted keys, so equal configurations always
/// fingerprint identically.
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let bytes = serde_json::to_vec(value)?;
    Ok(blake3::hash(&bytes).to_hex().as_str()[..8].to_string())
}

/// Key for a configuration shorthand.
pub fn config_key(strategy: KeyStrategy, props: &Props, index: Option<usize>) -> Result<String> {
    if let KeyStrategy::Fields(fields) = strategy {
        let parts: Vec<Option<String>> = fields
            .iter()
            .map(|f| props.get(f).and_then(|v| v.to_token()))
            .collect();
        if parts.iter().any(Option::is_some) {
            let parts: Vec<String> = parts.into_iter().map(Option::unwrap_or_default).collect();
            return Ok(parts.join("-"));
        }
    }
    let hash = fingerprint(props)?;
    Ok(positional(index, &hash))
}

/// Key for a primitive shorthand: the value itself, prefixed by position.
pub fn primitive_key(value: &str, index: Option<usize>) -> String {
    positional(index, value)
}

fn positional(index: Option<usize>, tail: &str) -> String {
    match index {
        Some(i) => format!("{i}-{tail}"),
        None => tail.to_string(),
    }
}

/// Tracks keys handed out within one collection.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    taken: HashSet<String>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit key as-is.
    pub fn reserve(&mut self, key: &str) {
        self.taken.insert(key.to_string());
    }

    /// Claim a derived key, suffixing `~<index>` until it is unique.
    pub fn claim(&mut self, key: String, index: usize) -> String {
        let mut candidate = key;
        while self.taken.contains(&candidate) {
            log::trace!("derived key {candidate} already taken");
            candidate = format!("{candidate}~{index}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
