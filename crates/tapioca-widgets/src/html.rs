//! Shorthand targets for bare HTML elements.

use tapioca_core::Contract;

/// An `<img>`. A primitive shorthand is taken as its `src`.
pub const IMAGE: Contract = Contract::new("img").default_as("img").value_prop("src");

#[cfg(test)]
mod tests {
    use super::*;
    use tapioca_core::{props, CreateOptions, ElementType};

    #[test]
    fn string_becomes_src() {
        let created = IMAGE.create("/avatar.png", &CreateOptions::new()).unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.element, ElementType::tag("img"));
        assert_eq!(node.attributes.get_str("src"), Some("/avatar.png"));
        assert!(node.class_name.is_none());
    }

    #[test]
    fn config_forwards_attributes() {
        let created = IMAGE
            .create(props! { "src" => "/a.png", "alt" => "A" }, &CreateOptions::new())
            .unwrap();
        let node = created.node().unwrap();
        assert_eq!(node.attributes.get_str("alt"), Some("A"));
    }
}
