//! Terminal preview of a resolved node tree.
//!
//! [`TreeView`] is a ratatui [`Widget`] that draws a node tree as an
//! indented outline, one line per node or text child:
//!
//! ```text
//! div.ui.cards
//!   div.ui.card #A-
//!     img
//!     div.content
//!       div.header
//!         "A"
//! ```
//!
//! Lines wider than the area are cut with an ellipsis, measured in display
//! columns so wide characters never spill past the edge.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tapioca_core::{Child, Node};

const ELLIPSIS: &str = "…";

/// One row of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub label: String,
    pub is_text: bool,
}

/// Indented outline of a node tree.
#[derive(Debug, Clone)]
pub struct TreeView<'a> {
    root: &'a Node,
    indent: u16,
    show_keys: bool,
    node_style: Style,
    text_style: Style,
}

impl<'a> TreeView<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self {
            root,
            indent: 2,
            show_keys: true,
            node_style: Style::default().fg(Color::Cyan),
            text_style: Style::default().fg(Color::Gray),
        }
    }

    /// Columns of indentation per level.
    pub fn with_indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    /// Whether node keys are appended as `#key`.
    pub fn with_keys(mut self, show: bool) -> Self {
        self.show_keys = show;
        self
    }

    pub fn with_node_style(mut self, style: Style) -> Self {
        self.node_style = style;
        self
    }

    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// The outline rows in document order.
    pub fn rows(&self) -> Vec<OutlineRow> {
        let mut rows = Vec::new();
        self.collect(self.root, 0, &mut rows);
        rows
    }

    fn collect(&self, node: &Node, depth: usize, rows: &mut Vec<OutlineRow>) {
        rows.push(OutlineRow {
            depth,
            label: self.node_label(node),
            is_text: false,
        });
        for child in &node.children {
            match child {
                Child::Node(n) => self.collect(n, depth + 1, rows),
                Child::Text(text) => rows.push(OutlineRow {
                    depth: depth + 1,
                    label: format!("{text:?}"),
                    is_text: true,
                }),
            }
        }
    }

    fn node_label(&self, node: &Node) -> String {
        let mut label = node.element.name().to_string();
        if let Some(class) = &node.class_name {
            for token in class.split_whitespace() {
                label.push('.');
                label.push_str(token);
            }
        }
        if let Some(key) = node.key.as_deref().filter(|_| self.show_keys) {
            label.push_str(" #");
            label.push_str(key);
        }
        label
    }
}

impl Widget for TreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let width = usize::from(area.width);
        for (row, y) in self.rows().into_iter().zip(area.top()..area.bottom()) {
            let pad = row.depth * usize::from(self.indent);
            if pad >= width {
                continue;
            }
            let label = truncate(&row.label, width - pad);
            let style = if row.is_text {
                self.text_style
            } else {
                self.node_style
            };
            // `pad < width <= u16::MAX`, so the cast is lossless.
            buf.set_string(area.left() + pad as u16, y, label, style);
        }
    }
}

/// Cut `s` to at most `max_width` display columns, ending with an ellipsis
/// when anything was dropped.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > target {
            break;
        }
        out.push(c);
        width += cw;
    }
    if max_width >= ELLIPSIS.width() {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapioca_core::props;
    use tapioca_widgets::card::card_group;

    fn render_lines(view: TreeView<'_>, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        (area.top()..area.bottom())
            .map(|y| {
                let line: String = (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    #[test]
    fn outline_of_card_group() {
        let group = card_group(vec![props! { "header" => "A" }]).unwrap();
        let lines = render_lines(TreeView::new(&group), 30, 6);
        assert_eq!(
            lines,
            vec![
                "div.ui.cards",
                "  div.ui.card #A-",
                "    div.content",
                "      div.header",
                "        \"A\"",
                "",
            ]
        );
    }

    #[test]
    fn keys_can_be_hidden() {
        let group = card_group(vec![props! { "header" => "A" }]).unwrap();
        let rows = TreeView::new(&group).with_keys(false).rows();
        assert_eq!(rows[1].label, "div.ui.card");
        assert!(rows[4].is_text);
    }

    #[test]
    fn long_lines_are_truncated() {
        let group = card_group(vec![props! { "header" => "A" }]).unwrap();
        let lines = render_lines(TreeView::new(&group).with_indent(4), 12, 2);
        assert_eq!(lines[0], "div.ui.cards");
        assert_eq!(lines[1], "    div.ui.…");
    }

    #[test]
    fn rows_beyond_height_are_dropped() {
        let group = card_group(vec![props! { "header" => "A" }]).unwrap();
        let lines = render_lines(TreeView::new(&group), 20, 2);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn truncate_counts_display_columns() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
        assert_eq!(truncate("abc", 0), "");
    }
}
