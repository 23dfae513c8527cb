//! Shorthand resolution engine for the **tapioca** component library.
//!
//! Every tapioca widget follows the same shape: take its props, compose a
//! class string from its flags, forward the props it does not recognize,
//! pick an element type, and decide where its body comes from. This crate
//! holds that shared machinery; widgets themselves live in
//! `tapioca-widgets` and are just [`Contract`] values.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Props`] / [`PropValue`] | Configuration supplied on every resolution |
//! | [`Contract`] | A widget's recognized props, default element, classes and body |
//! | [`Shorthand`] | Tagged union of everything a shorthand slot may hold |
//! | [`Node`] | The resolved, immutable output tree |
//! | [`CreateOptions`] | Key generation, default and override props for [`create`] |
//!
//! # Pieces
//!
//! 1. **Partition** -- [`partition`] splits props into recognized and
//!    forwarded halves.
//! 2. **Classes** -- the [`classes`] helpers turn flags and enums into
//!    tokens, assembled in a fixed order by [`ClassNames`].
//! 3. **Element type** -- [`resolve_type`] picks the `as` override, the
//!    contract default, or `div`.
//! 4. **Content** -- [`resolve_content`] applies children > content >
//!    derived precedence.
//! 5. **Factory** -- [`create`] expands shorthand into nodes with stable
//!    keys.
//!
//! # Quick example
//!
//! ```
//! use tapioca_core::{Contract, CreateOptions};
//!
//! const LABEL: Contract = Contract::new("Label");
//!
//! let created = LABEL.create("hello", &CreateOptions::new()).unwrap();
//! let node = created.node().unwrap();
//! assert_eq!(node.key.as_deref(), Some("hello"));
//! ```

pub mod classes;
pub mod content;
pub mod contract;
pub mod element;
pub mod error;
pub mod factory;
pub mod keys;
pub mod node;
pub mod props;
pub mod testing;

pub use classes::ClassNames;
pub use content::{body_source, resolve_content, Resolution};
pub use contract::{partition, render_node, shell, unhandled_props, Contract, COMMON_PROPS};
pub use element::{resolve_type, ElementType, GENERIC_TAG};
pub use error::{Error, Result};
pub use factory::{create, CreateOptions, Created, Overrides, Primitive, Shorthand};
pub use keys::KeyStrategy;
pub use node::{to_children, Child, Node};
pub use props::{PropValue, Props};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn resolved_values_are_shareable_across_threads() {
        assert_send_sync::<Contract>();
        assert_send_sync::<Node>();
        assert_send_sync::<Props>();
        assert_send_sync::<Shorthand>();
    }
}
