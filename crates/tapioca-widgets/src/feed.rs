//! Extra feed content: trailing text or a row of images.

use tapioca_core::classes::key_only;
use tapioca_core::{
    body_source, shell, to_children, ClassNames, Contract, CreateOptions, Node, PropValue, Props,
    Result, Shorthand,
};

use crate::html;
use crate::validate::{check, Rule};

pub const FEED_EXTRA: Contract = Contract::new("FeedExtra")
    .props(&["images", "text"])
    .classes(|p: &Props| {
        let text = p.flag("content") || p.flag("text");
        ClassNames::new()
            .maybe(key_only(p.get("images"), "images"))
            .maybe(text.then(|| "text".to_string()))
            .token("extra")
    })
    .render_with(render_extra)
    .validate_with(|p: &Props| {
        check(
            "FeedExtra",
            p,
            &[
                ("content", Rule::Content),
                ("images", Rule::Disallow(&["text"])),
                ("images", Rule::AnyOf(&[Rule::Bool, Rule::Collection])),
                ("text", Rule::Bool),
            ],
        )
    });

fn render_extra(contract: &Contract, p: &Props) -> Result<Node> {
    let node = shell(contract, p);
    if let Some(children) = body_source(p.get("children")) {
        return Ok(node.with_children(to_children(children)?));
    }

    let mut children = match body_source(p.get("content")) {
        Some(content) => to_children(content)?,
        None => Vec::new(),
    };
    // `images: true` only marks the block; there is nothing to draw.
    let list = p.get("images").filter(|v| matches!(v, PropValue::List(_)));
    if list.is_some() {
        let images = Shorthand::from_prop(list)?;
        children.extend(html::IMAGE.create(images, &CreateOptions::new())?.into_children());
    }
    Ok(node.with_children(children))
}
