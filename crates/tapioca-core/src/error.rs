//! Error type shared by the engine and the widget definitions built on it.

/// Errors surfaced while validating props or resolving shorthand.
///
/// Absence is never an error: an empty shorthand resolves to
/// [`Created::Nothing`](crate::factory::Created::Nothing).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The shorthand factory was handed a value it cannot expand.
    #[error("unsupported shorthand value: {0}")]
    UnsupportedShorthand(&'static str),

    /// A value that cannot be rendered was placed in a child position.
    #[error("invalid child: {0} cannot be rendered as content")]
    InvalidChild(&'static str),

    /// A composer that requires a concrete value received none.
    #[error("`{key}` requires a value")]
    MissingValue { key: String },

    /// An enum-like prop holds a value outside its allowed set.
    #[error("{component}: invalid value `{value}` for `{prop}`, expected one of [{allowed}]")]
    InvalidValue {
        component: String,
        prop: String,
        value: String,
        allowed: String,
    },

    /// A prop holds a value of the wrong kind.
    #[error("{component}: `{prop}` expects {expected}, got {found}")]
    InvalidType {
        component: String,
        prop: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Two mutually exclusive props were both supplied.
    #[error("{component}: `{prop}` cannot be combined with `{other}`")]
    Conflict {
        component: String,
        prop: String,
        other: String,
    },

    /// Props could not be decoded from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout tapioca.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a contract violation caught by validation, as
    /// opposed to a resolution failure inside the engine.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            Error::InvalidValue { .. } | Error::InvalidType { .. } | Error::Conflict { .. }
        )
    }
}
