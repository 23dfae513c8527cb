//! HTML-like serialization of resolved node trees.
//!
//! Output is compact and deterministic: `class` comes first, remaining
//! attributes follow in sorted order, and text is escaped. Keys are a
//! reconciliation detail and are not written.

use std::fmt::Write;

use tapioca_core::{Child, Node, PropValue, Props};

/// Elements written without a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Serialize `node` and its descendants.
pub fn to_markup(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    let tag = node.element.name();
    out.push('<');
    out.push_str(tag);
    if let Some(class) = &node.class_name {
        write_attr(out, "class", class);
    }
    for (name, value) in node.attributes.iter() {
        write_prop(out, name, value);
    }
    out.push('>');

    if VOID_TAGS.iter().any(|t| *t == tag) && node.children.is_empty() {
        return;
    }
    for child in &node.children {
        match child {
            Child::Text(text) => out.push_str(&escape(text)),
            Child::Node(n) => write_node(n, out),
        }
    }
    let _ = write!(out, "</{tag}>");
}

fn write_prop(out: &mut String, name: &str, value: &PropValue) {
    match value {
        PropValue::Bool(true) => {
            out.push(' ');
            out.push_str(name);
        }
        PropValue::Str(_) | PropValue::Number(_) => {
            if let Some(token) = value.to_token() {
                write_attr(out, name, &token);
            }
        }
        PropValue::Props(style) if name == "style" => write_attr(out, name, &style_text(style)),
        PropValue::List(items) => {
            let tokens: Vec<String> = items.iter().filter_map(PropValue::to_token).collect();
            write_attr(out, name, &tokens.join(" "));
        }
        // Nodes, nested props and element types have no attribute form.
        _ => {}
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape(value));
}

fn style_text(style: &Props) -> String {
    style
        .iter()
        .filter_map(|(k, v)| v.to_token().map(|v| format!("{k}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapioca_core::{props, ElementType};
    use tapioca_widgets::card::card_group;
    use tapioca_widgets::segment::SEGMENT;

    #[test]
    fn class_first_then_sorted_attributes() {
        let node = Node::new(ElementType::tag("a"))
            .with_class("ui card")
            .with_attributes(props! { "title" => "T", "href" => "/x", "id" => 3 })
            .with_child("Go");
        assert_eq!(
            to_markup(&node),
            r#"<a class="ui card" href="/x" id="3" title="T">Go</a>"#
        );
    }

    #[test]
    fn booleans_and_nulls() {
        let node = Node::new(ElementType::tag("input")).with_attributes(props! {
            "disabled" => true,
            "hidden" => false,
            "value" => PropValue::Null,
        });
        assert_eq!(to_markup(&node), "<input disabled>");
    }

    #[test]
    fn style_pairs() {
        let node = Node::new(ElementType::default()).with_attributes(props! {
            "style" => props! { "margin" => 0, "color" => "red" },
        });
        assert_eq!(to_markup(&node), r#"<div style="color: red; margin: 0;"></div>"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node = Node::new(ElementType::tag("p"))
            .with_attributes(props! { "title" => "a \"b\"" })
            .with_child("1 < 2 & 3");
        assert_eq!(
            to_markup(&node),
            r#"<p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p>"#
        );
    }

    #[test]
    fn widget_tree() {
        let segment = SEGMENT
            .render(&props! { "basic" => true, "content" => "Hi" })
            .unwrap();
        assert_eq!(to_markup(&segment), r#"<div class="ui basic segment">Hi</div>"#);

        let group = card_group(vec![props! { "header" => "A", "image" => "/a.png" }]).unwrap();
        assert_eq!(
            to_markup(&group),
            concat!(
                r#"<div class="ui cards"><div class="ui card"><img src="/a.png">"#,
                r#"<div class="content"><div class="header">A</div></div></div></div>"#,
            )
        );
    }
}
