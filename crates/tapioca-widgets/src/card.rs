//! Cards and card groups.
//!
//! A [`CARD_GROUP`] given an `items` collection expands each entry into a
//! [`CARD`], keyed by its explicit `key` or by its `header` and
//! `description`. A card in turn expands `header`, `meta` and
//! `description` shorthand into a [`CARD_CONTENT`] block, and `extra` into
//! a second, extra content block.

use tapioca_core::classes::{key_only, text_align, width};
use tapioca_core::{
    props, resolve_content, resolve_type, shell, Child, ClassNames, Contract,
    CreateOptions, ElementType, KeyStrategy, Node, PropValue, Props, Result, Shorthand,
};

use crate::html;
use crate::sui;
use crate::validate::{check, Rule};

pub const CARD_GROUP: Contract = Contract::new("CardGroup")
    .props(&[
        "centered",
        "doubling",
        "items",
        "itemsPerRow",
        "stackable",
        "textAlign",
    ])
    .classes(group_classes)
    .derive(group_items)
    .validate_with(validate_group);

pub const CARD: Contract = Contract::new("Card")
    .props(&[
        "centered",
        "color",
        "description",
        "extra",
        "fluid",
        "header",
        "href",
        "image",
        "link",
        "meta",
        "raised",
    ])
    .classes(card_classes)
    .render_with(render_card)
    .validate_with(validate_card);

pub const CARD_CONTENT: Contract = Contract::new("CardContent")
    .props(&["description", "extra", "header", "meta", "textAlign"])
    .classes(|p: &Props| {
        ClassNames::new()
            .maybe(key_only(p.get("extra"), "extra"))
            .maybe(text_align(p.get("textAlign")))
            .token("content")
    })
    .derive(content_parts)
    .validate_with(validate_content);

pub const CARD_HEADER: Contract = text_part("CardHeader", |p: &Props| {
    aligned(p).token("header")
});

pub const CARD_META: Contract = text_part("CardMeta", |p: &Props| aligned(p).token("meta"));

pub const CARD_DESCRIPTION: Contract = text_part("CardDescription", |p: &Props| {
    aligned(p).token("description")
});

const fn text_part(name: &'static str, classes: fn(&Props) -> ClassNames) -> Contract {
    Contract::new(name)
        .props(&["textAlign"])
        .classes(classes)
        .validate_with(validate_text_part)
}

fn aligned(p: &Props) -> ClassNames {
    ClassNames::new().maybe(text_align(p.get("textAlign")))
}

fn group_classes(p: &Props) -> ClassNames {
    ClassNames::new()
        .token("ui")
        .maybe(key_only(p.get("centered"), "centered"))
        .maybe(key_only(p.get("doubling"), "doubling"))
        .maybe(key_only(p.get("stackable"), "stackable"))
        .maybe(text_align(p.get("textAlign")))
        .maybe(width(p.get("itemsPerRow"), None, false))
        .token("cards")
}

fn group_items(p: &Props) -> Result<Vec<Child>> {
    let items = Shorthand::from_prop(p.get("items"))?;
    let options =
        CreateOptions::new().key_strategy(KeyStrategy::Fields(&["header", "description"]));
    Ok(CARD.create(items, &options)?.into_children())
}

fn card_classes(p: &Props) -> ClassNames {
    ClassNames::new()
        .token("ui")
        .value(p.get("color"))
        .maybe(key_only(p.get("centered"), "centered"))
        .maybe(key_only(p.get("fluid"), "fluid"))
        .maybe(key_only(p.get("link"), "link"))
        .maybe(key_only(p.get("raised"), "raised"))
        .token("card")
}

/// A card with an `href` renders as a link unless `as` overrides it.
fn render_card(contract: &Contract, p: &Props) -> Result<Node> {
    let mut node = shell(contract, p);
    if let Some(href) = p.get_present("href") {
        node.element = resolve_type(p, Some(&ElementType::tag("a")));
        node.attributes.insert("href", href.clone());
    }
    let children = resolve_content(p.get("children"), p.get("content"), || card_body(p))?
        .into_children()?;
    Ok(node.with_children(children))
}

fn card_body(p: &Props) -> Result<Vec<Child>> {
    let mut children = Vec::new();

    let image = Shorthand::from_prop(p.get("image"))?;
    let no_key = CreateOptions::new().auto_generate_key(false);
    children.extend(html::IMAGE.create(image, &no_key)?.into_children());

    if ["description", "header", "meta"].iter().any(|k| p.flag(k)) {
        let mut content = Props::new();
        for k in ["description", "header", "meta"] {
            if let Some(v) = p.get(k) {
                content.insert(k, v.clone());
            }
        }
        children.push(CARD_CONTENT.render(&content)?.into());
    }

    if let Some(extra) = p.get("extra").filter(|v| v.is_truthy()) {
        let block = props! { "extra" => true, "children" => extra.clone() };
        children.push(CARD_CONTENT.render(&block)?.into());
    }

    Ok(children)
}

fn content_parts(p: &Props) -> Result<Vec<Child>> {
    let no_key = CreateOptions::new().auto_generate_key(false);
    let mut children = Vec::new();
    for (prop, contract) in [
        ("header", &CARD_HEADER),
        ("meta", &CARD_META),
        ("description", &CARD_DESCRIPTION),
    ] {
        let value = Shorthand::from_prop(p.get(prop))?;
        children.extend(contract.create(value, &no_key)?.into_children());
    }
    Ok(children)
}

fn validate_group(p: &Props) -> Result<()> {
    check(
        "CardGroup",
        p,
        &[
            ("centered", Rule::Bool),
            ("content", Rule::Content),
            ("doubling", Rule::Bool),
            ("items", Rule::Collection),
            ("itemsPerRow", Rule::Width),
            ("stackable", Rule::Bool),
            ("textAlign", Rule::OneOf(sui::TEXT_ALIGNMENTS_UNJUSTIFIED)),
        ],
    )
}

fn validate_card(p: &Props) -> Result<()> {
    check(
        "Card",
        p,
        &[
            ("centered", Rule::Bool),
            ("color", Rule::OneOf(sui::COLORS)),
            ("content", Rule::Content),
            ("description", Rule::Item),
            ("extra", Rule::Content),
            ("fluid", Rule::Bool),
            ("header", Rule::Item),
            ("href", Rule::Str),
            ("image", Rule::Item),
            ("link", Rule::Bool),
            ("meta", Rule::Item),
            ("raised", Rule::Bool),
        ],
    )
}

fn validate_content(p: &Props) -> Result<()> {
    check(
        "CardContent",
        p,
        &[
            ("content", Rule::Content),
            ("description", Rule::Item),
            ("extra", Rule::Bool),
            ("header", Rule::Item),
            ("meta", Rule::Item),
            ("textAlign", Rule::OneOf(sui::TEXT_ALIGNMENTS)),
        ],
    )
}

fn validate_text_part(p: &Props) -> Result<()> {
    check(
        "CardText",
        p,
        &[
            ("content", Rule::Content),
            ("textAlign", Rule::OneOf(sui::TEXT_ALIGNMENTS_UNJUSTIFIED)),
        ],
    )
}

/// Render a card group straight from an `items` list.
pub fn card_group(items: Vec<Props>) -> Result<Node> {
    CARD_GROUP.render(&props! { "items" => PropValue::from(items) })
}
