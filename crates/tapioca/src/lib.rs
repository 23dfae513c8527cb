//! **tapioca** -- a shorthand-driven presentational component library.
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! tapioca = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`tapioca_core`] are available at the crate root
//!   ([`Contract`], [`Props`], [`Node`], [`Shorthand`], [`create`], etc.).
//! * The [`widgets`] module re-exports everything from [`tapioca_widgets`]
//!   (cards, statistics, items, feeds, segments, and more).
//! * [`ratatui`] is re-exported for use with [`preview::TreeView`].
//!
//! # Output
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`markup`] | HTML-like serialization of a node tree |
//! | [`preview`] | Terminal outline of a node tree |
//!
//! # Quick start
//!
//! ```
//! use tapioca::markup::to_markup;
//! use tapioca::widgets::card::CARD_GROUP;
//! use tapioca::Props;
//!
//! let props = Props::from_json(r#"{ "items": [{ "header": "Elliot" }] }"#).unwrap();
//! let group = CARD_GROUP.render(&props).unwrap();
//! assert!(to_markup(&group).contains(r#"<div class="header">Elliot</div>"#));
//! ```

pub mod markup;
pub mod preview;

pub use tapioca_core::*;
pub mod widgets {
    pub use tapioca_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use ratatui;
