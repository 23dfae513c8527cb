//! Ready-made widget contracts for **tapioca**.
//!
//! Each widget is a [`tapioca_core::Contract`] constant. Render one directly
//! with [`Contract::render`](tapioca_core::Contract::render), or expand
//! shorthand against it with [`Contract::create`](tapioca_core::Contract::create).
//! Every widget validates its props before rendering.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`card`] | Cards, card groups and card content blocks |
//! | [`feed`] | Extra feed content with text or images |
//! | [`item`] | Item content with header, meta, description and extra |
//! | [`reveal`] | Hidden/visible reveal content |
//! | [`segment`] | Grouped content segments |
//! | [`statistic`] | Statistics and statistic groups |
//! | [`table`] | Table header |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`html`] | Contracts for bare HTML elements used as shorthand targets |
//! | [`sui`] | Allowed values for shared enum-like props |
//! | [`validate`] | Prop validation rules |

pub mod card;
pub mod feed;
pub mod html;
pub mod item;
pub mod reveal;
pub mod segment;
pub mod statistic;
pub mod sui;
pub mod table;
pub mod validate;

use tapioca_core::Contract;

/// Every top-level widget, by name.
pub const CATALOG: &[&Contract] = &[
    &card::CARD,
    &card::CARD_CONTENT,
    &card::CARD_DESCRIPTION,
    &card::CARD_GROUP,
    &card::CARD_HEADER,
    &card::CARD_META,
    &feed::FEED_EXTRA,
    &item::ITEM_CONTENT,
    &item::ITEM_DESCRIPTION,
    &item::ITEM_EXTRA,
    &item::ITEM_HEADER,
    &item::ITEM_META,
    &reveal::REVEAL_CONTENT,
    &segment::SEGMENT,
    &statistic::STATISTIC,
    &statistic::STATISTIC_GROUP,
    &statistic::STATISTIC_LABEL,
    &statistic::STATISTIC_VALUE,
    &table::TABLE_HEADER,
];

/// Look up a widget by its display name, e.g. `"CardGroup"`.
pub fn find(name: &str) -> Option<&'static Contract> {
    CATALOG.iter().copied().find(|c| c.name() == name)
}
