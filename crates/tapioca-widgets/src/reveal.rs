//! Reveal content: the visible or hidden half of a reveal.

use tapioca_core::classes::key_only;
use tapioca_core::{ClassNames, Contract, Props, Result};

use crate::validate::{check, Rule};

pub const REVEAL_CONTENT: Contract = Contract::new("RevealContent")
    .props(&["hidden", "visible"])
    .classes(|p: &Props| {
        ClassNames::new()
            .token("ui")
            .maybe(key_only(p.get("hidden"), "hidden"))
            .maybe(key_only(p.get("visible"), "visible"))
            .token("content")
    })
    .validate_with(validate);

fn validate(p: &Props) -> Result<()> {
    check(
        "RevealContent",
        p,
        &[
            ("content", Rule::Content),
            ("hidden", Rule::Bool),
            ("visible", Rule::Bool),
        ],
    )
}
