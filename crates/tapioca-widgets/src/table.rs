//! Table header.

use tapioca_core::classes::key_only;
use tapioca_core::{ClassNames, Contract, Props, Result};

use crate::validate::{check, Rule};

/// Renders a `<thead>` unless `as` says otherwise.
pub const TABLE_HEADER: Contract = Contract::new("TableHeader")
    .props(&["fullWidth"])
    .default_as("thead")
    .classes(|p: &Props| ClassNames::new().maybe(key_only(p.get("fullWidth"), "full-width")))
    .validate_with(validate);

fn validate(p: &Props) -> Result<()> {
    check(
        "TableHeader",
        p,
        &[("content", Rule::Content), ("fullWidth", Rule::Bool)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapioca_core::testing::TestRender;
    use tapioca_core::{props, ElementType};

    #[test]
    fn defaults_to_thead() {
        let out = TestRender::new(&TABLE_HEADER).render(props! { "fullWidth" => true });
        assert_eq!(out.node().element, ElementType::tag("thead"));
        assert_eq!(out.class(), "full-width");
    }

    #[test]
    fn as_override_wins() {
        let out = TestRender::new(&TABLE_HEADER).render(props! { "as" => "div" });
        assert_eq!(out.node().element, ElementType::tag("div"));
        assert!(out.node().class_name.is_none());
    }
}
