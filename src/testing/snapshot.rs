//! Snapshot rendering helpers.
//!
//! Functions for converting trees, laid-out frames and recorded draw calls
//! into plain-text strings suitable for snapshot testing and assertions.

use std::fmt::Write;

use crate::frame::Frame;
use crate::geometry::Rect;
use crate::tree::WidgetTree;

use super::recorder::DrawCommand;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// One line per node in pre-order, indented two spaces per level. Nodes with a
/// click callback are suffixed with ` [click]`.
pub fn tree_to_string(tree: &WidgetTree) -> String {
    let mut out = String::new();
    for node in tree.outline() {
        let click = if node.has_click { " [click]" } else { "" };
        let _ = writeln!(out, "{}{}{}", "  ".repeat(node.depth), node.kind, click);
    }
    out.trim_end().to_owned()
}

/// Like [`tree_to_string`], with each node's absolute box appended.
pub fn frame_to_string(frame: &Frame) -> String {
    let tree = frame.tree();
    let mut out = String::new();
    for node in tree.outline().into_iter().zip(frame.boxes()) {
        let (outline, (_, rect)) = node;
        let _ = writeln!(
            out,
            "{}{} {}",
            "  ".repeat(outline.depth),
            outline.kind,
            rect_to_string(*rect)
        );
    }
    out.trim_end().to_owned()
}

/// One line per recorded draw call.
pub fn commands_to_string(commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        let _ = match command {
            DrawCommand::Fill { rect, radius, color } => {
                writeln!(out, "fill {} radius {radius} {color}", rect_to_string(*rect))
            }
            DrawCommand::Text(run) => writeln!(
                out,
                "text {:?} at ({}, {}) {}/{} {} {} {}",
                run.text,
                run.x,
                run.y,
                run.align.horizontal,
                run.align.vertical,
                run.font,
                run.size,
                run.color
            ),
        };
    }
    out.trim_end().to_owned()
}

fn rect_to_string(rect: Rect) -> String {
    format!("({}, {}, {}x{})", rect.x, rect.y, rect.width, rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{TextAlignment, TextRun};
    use crate::style::{Color, TextAlign, TextBaseline, FONT_REGULAR};
    use crate::tree::TreeBuilder;

    #[test]
    fn tree_outline_is_indented() {
        let mut b = TreeBuilder::new();
        b.begin();
        b.container(|b| {
            b.text("A").on_click(|_| {});
        });
        let tree = b.finish();
        insta::assert_snapshot!(tree_to_string(&tree), @r#"
        Container
          Container
            Text("A") [click]
        "#);
    }

    #[test]
    fn commands_one_per_line() {
        let commands = vec![
            DrawCommand::Fill {
                rect: Rect::new(0.0, 0.0, 10.0, 5.0),
                radius: 2.0,
                color: Color::BLACK,
            },
            DrawCommand::Text(TextRun {
                x: 1.0,
                y: 2.5,
                text: "hi".into(),
                align: TextAlignment { horizontal: TextAlign::Left, vertical: TextBaseline::Middle },
                font: FONT_REGULAR.into(),
                size: 18.0,
                color: Color::WHITE,
            }),
        ];
        insta::assert_snapshot!(commands_to_string(&commands), @r#"
        fill (0, 0, 10x5) radius 2 #000000ff
        text "hi" at (1, 2.5) left/middle Roboto-Regular 18 #ffffffff
        "#);
    }
}
