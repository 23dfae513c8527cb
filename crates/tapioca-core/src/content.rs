//! Content resolution: which source a node's body comes from.
//!
//! Precedence is fixed:
//!
//! 1. `children`, when present, rendered verbatim;
//! 2. otherwise `content`, when present;
//! 3. otherwise the widget's derived body (usually a shorthand collection).
//!
//! "Present" means supplied, neither undefined nor null, and not an empty
//! list. Empty `children` or `content` fall through to the next source, so
//! an empty derived collection is what yields an empty body.

use crate::error::Result;
use crate::node::{to_children, Child};
use crate::props::PropValue;

/// The branch [`resolve_content`] selected.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Children(&'a PropValue),
    Content(&'a PropValue),
    Derived(Vec<Child>),
}

impl Resolution<'_> {
    /// Flatten the selected source into children.
    pub fn into_children(self) -> Result<Vec<Child>> {
        match self {
            Resolution::Children(v) | Resolution::Content(v) => to_children(v),
            Resolution::Derived(children) => Ok(children),
        }
    }
}

/// The value as a body source, or `None` when it is absent, undefined, null
/// or an empty list.
pub fn body_source(value: Option<&PropValue>) -> Option<&PropValue> {
    value.filter(|v| {
        v.is_present() && !matches!(v, PropValue::List(items) if items.is_empty())
    })
}

/// Pick the body source. `derive` runs only when neither `children` nor
/// `content` is present.
pub fn resolve_content<'a, F>(
    children: Option<&'a PropValue>,
    content: Option<&'a PropValue>,
    derive: F,
) -> Result<Resolution<'a>>
where
    F: FnOnce() -> Result<Vec<Child>>,
{
    if let Some(children) = body_source(children) {
        return Ok(Resolution::Children(children));
    }
    if let Some(content) = body_source(content) {
        return Ok(Resolution::Content(content));
    }
    derive().map(Resolution::Derived)
}
