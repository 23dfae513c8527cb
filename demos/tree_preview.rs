//! # Tree Preview Example
//!
//! Resolves any catalogued widget from a JSON configuration and draws the
//! resulting tree with [`TreeView`] into an off-screen buffer.
//!
//! Run with:
//! `cargo run --example tree_preview -- Segment '{"color": "red", "content": "Hi"}'`
//!
//! With no arguments a small item layout is shown.

use tapioca::preview::TreeView;
use tapioca::ratatui::buffer::Buffer;
use tapioca::ratatui::layout::Rect;
use tapioca::ratatui::widgets::Widget;
use tapioca::{widgets, Props};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

const DEFAULT_PROPS: &str = r#"{
    "verticalAlign": "middle",
    "header": { "content": "Arrowhead Valley Camp", "as": "a" },
    "meta": "Camping",
    "description": "A sprawling campsite at the foot of the hills.",
    "extra": "Additional details"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "ItemContent".to_string());
    let json = args.next().unwrap_or_else(|| DEFAULT_PROPS.to_string());

    let Some(contract) = widgets::find(&name) else {
        let known: Vec<_> = widgets::CATALOG.iter().map(|c| c.name()).collect();
        return Err(format!("unknown widget {name:?}; try one of {}", known.join(", ")).into());
    };
    let node = contract.render(&Props::from_json(&json)?)?;
    log::debug!("{name} resolved to {} children", node.children.len());

    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let mut buf = Buffer::empty(area);
    TreeView::new(&node).render(area, &mut buf);

    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect();
        let line = line.trim_end();
        if !line.is_empty() {
            println!("{line}");
        }
    }
    Ok(())
}
