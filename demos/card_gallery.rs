//! # Card Gallery Example
//!
//! Demonstrates shorthand expansion end to end:
//! - A card group configured entirely from JSON
//! - Stable keys derived from each card's header and description
//! - Markup and JSON output of the resolved tree
//! - Validation errors for a bad configuration
//!
//! Run with: `RUST_LOG=debug cargo run --example card_gallery`

use tapioca::markup::to_markup;
use tapioca::widgets::card::CARD_GROUP;
use tapioca::widgets::statistic::STATISTIC_GROUP;
use tapioca::Props;

const GALLERY: &str = r#"{
    "itemsPerRow": 3,
    "stackable": true,
    "items": [
        {
            "header": "Matthew",
            "meta": "Friend",
            "description": "Matthew is a musician living in Nashville.",
            "image": "/images/matthew.png",
            "extra": "22 friends"
        },
        {
            "header": "Elliot",
            "meta": "Coworker",
            "description": "Elliot is a film-maker living in New York.",
            "href": "/people/elliot"
        },
        {
            "key": "pinned",
            "header": "Molly",
            "color": "teal",
            "raised": true
        }
    ]
}"#;

const STATS: &str = r#"{
    "widths": "three",
    "items": [
        { "value": "22", "label": "Saves" },
        { "value": "31,200", "label": "Views" },
        { "value": 22, "label": "Members" }
    ]
}"#;

fn main() -> Result<(), tapioca::Error> {
    env_logger::init();

    let gallery = CARD_GROUP.render(&Props::from_json(GALLERY)?)?;
    log::info!("rendered {} cards", gallery.child_nodes().count());
    for card in gallery.child_nodes() {
        println!("key: {}", card.key.as_deref().unwrap_or("-"));
    }
    println!("\n{}\n", to_markup(&gallery));

    let stats = STATISTIC_GROUP.render(&Props::from_json(STATS)?)?;
    println!("{}\n", serde_json::to_string_pretty(&stats)?);

    // A configuration that violates the card group's rules.
    let bad = Props::from_json(r#"{ "itemsPerRow": 40 }"#)?;
    match CARD_GROUP.render(&bad) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {err}"),
    }
    Ok(())
}
