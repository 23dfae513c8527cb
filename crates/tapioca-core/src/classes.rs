//! Class-name composition.
//!
//! Each helper turns one prop into at most one class fragment. A widget
//! lists its helpers in a fixed order on a [`ClassNames`] builder, so the
//! output depends only on the prop values, never on the order the props
//! were supplied in. Enum values are emitted as given; checking them
//! against an allowed set is the job of the widget's validation rules.

use crate::error::{Error, Result};
use crate::props::PropValue;

const NUMBER_WORDS: [&str; 17] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Emit `key` when the value is truthy.
pub fn key_only(value: Option<&PropValue>, key: &str) -> Option<String> {
    value.filter(|v| v.is_truthy()).map(|_| key.to_string())
}

/// Emit `key` for `true`, `"<value> <key>"` for a string or number, nothing
/// otherwise.
pub fn key_or_value_and_key(value: Option<&PropValue>, key: &str) -> Option<String> {
    match value {
        Some(PropValue::Bool(true)) => Some(key.to_string()),
        other => value_and_key(other, key),
    }
}

/// Emit `"<value> <key>"`; nothing when the value is absent, `true`, or
/// otherwise falsy.
pub fn value_and_key(value: Option<&PropValue>, key: &str) -> Option<String> {
    let value = value.filter(|v| v.is_truthy())?;
    value.to_token().map(|v| format!("{v} {key}"))
}

/// Strict form of [`value_and_key`] for widgets that cannot render without
/// the value.
pub fn require_value_and_key(value: Option<&PropValue>, key: &str) -> Result<String> {
    value_and_key(value, key).ok_or_else(|| Error::MissingValue {
        key: key.to_string(),
    })
}

/// `justified` stays bare; any other alignment becomes `"<value> aligned"`.
pub fn text_align(value: Option<&PropValue>) -> Option<String> {
    match value {
        Some(PropValue::Str(s)) if s == "justified" => Some("justified".to_string()),
        other => value_and_key(other, "aligned"),
    }
}

pub fn vertical_align(value: Option<&PropValue>) -> Option<String> {
    value_and_key(value, "aligned")
}

pub fn float(value: Option<&PropValue>) -> Option<String> {
    value_and_key(value, "floated")
}

/// Width classes: numbers 1 to 16 are spelled out, an optional suffix is
/// appended, and `equal` becomes `equal width` when `can_equal` is set.
pub fn width(value: Option<&PropValue>, suffix: Option<&str>, can_equal: bool) -> Option<String> {
    let value = value?;
    if can_equal && value.as_str() == Some("equal") {
        return Some("equal width".to_string());
    }
    let word = number_to_word(value)?;
    match suffix {
        Some(suffix) if !suffix.is_empty() => Some(format!("{word} {suffix}")),
        _ => Some(word),
    }
}

/// Spell out 1 to 16; other strings and numbers pass through unchanged.
pub fn number_to_word(value: &PropValue) -> Option<String> {
    let token = value.to_token().filter(|t| !t.is_empty())?;
    let word = token
        .parse::<usize>()
        .ok()
        .and_then(|n| NUMBER_WORDS.get(n))
        .filter(|w| !w.is_empty());
    Some(word.map_or(token, |w| w.to_string()))
}

/// Collapse runs of whitespace and trim.
pub fn normalize(class_name: &str) -> String {
    class_name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered class-token builder.
///
/// ```
/// use tapioca_core::classes::{key_only, ClassNames};
/// use tapioca_core::props;
///
/// let p = props! { "centered" => true };
/// let class = ClassNames::new()
///     .token("ui")
///     .maybe(key_only(p.get("centered"), "centered"))
///     .token("cards")
///     .finish(Some("extra  "));
/// assert_eq!(class, "ui centered cards extra");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    tokens: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal token.
    pub fn token(mut self, token: &str) -> Self {
        self.tokens.push(token.to_string());
        self
    }

    /// Append a token produced by one of the composer helpers.
    pub fn maybe(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.tokens.push(token);
        }
        self
    }

    /// Append a raw enum value (e.g. a color) when it is truthy.
    pub fn value(self, value: Option<&PropValue>) -> Self {
        let token = value.filter(|v| v.is_truthy()).and_then(PropValue::to_token);
        self.maybe(token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|t| t.trim().is_empty())
    }

    /// Join the tokens, append the caller's class name, and normalize.
    pub fn finish(self, class_name: Option<&str>) -> String {
        let mut joined = self.tokens.join(" ");
        if let Some(extra) = class_name {
            joined.push(' ');
            joined.push_str(extra);
        }
        normalize(&joined)
    }
}

/// Concatenate class names in order, skipping empty ones.
pub fn merge(parts: &[Option<&str>]) -> Option<String> {
    let joined = normalize(&parts.iter().flatten().copied().collect::<Vec<_>>().join(" "));
    (!joined.is_empty()).then_some(joined)
}
