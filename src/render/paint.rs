//! The draw pass: walk a laid-out frame in pre-order and issue draw calls.

use crate::frame::Frame;
use crate::geometry::Rect;
use crate::style::{ResolvedStyle, TextAlign, TextBaseline};
use crate::tree::WidgetKind;

use super::{Renderer, TextAlignment, TextRun};

/// Anchor point for text inside `rect`: left/centre/right horizontally,
/// top/middle/bottom vertically.
pub fn text_anchor(rect: Rect, align: TextAlignment) -> (f32, f32) {
    let x = match align.horizontal {
        TextAlign::Left => rect.x,
        TextAlign::Center => rect.x + rect.width / 2.0,
        TextAlign::Right => rect.right(),
    };
    let y = match align.vertical {
        TextBaseline::Top => rect.y,
        TextBaseline::Middle => rect.y + rect.height / 2.0,
        TextBaseline::Bottom => rect.bottom(),
    };
    (x, y)
}

fn text_run(rect: Rect, text: &str, style: ResolvedStyle) -> TextRun {
    let align = TextAlignment { horizontal: style.text_align, vertical: style.text_baseline };
    let (x, y) = text_anchor(rect, align);
    TextRun {
        x,
        y,
        text: text.to_owned(),
        align,
        font: style.font_family,
        size: style.font_size,
        color: style.color,
    }
}

/// Issue one fill per container and one text run per text leaf, in pre-order.
///
/// Frame begin/end is the caller's job.
pub fn paint(frame: &Frame, renderer: &mut dyn Renderer) {
    for &(id, rect) in frame.boxes() {
        let Some(node) = frame.tree().get(id) else {
            continue;
        };
        let style = node.styles.resolve();
        match &node.kind {
            WidgetKind::Container => {
                renderer.fill_rounded_rect(rect, style.border_radius, style.background);
            }
            WidgetKind::Text(text) => renderer.draw_text(&text_run(rect, text, style)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Rect = Rect::new(10.0, 20.0, 100.0, 40.0);

    fn anchor(h: TextAlign, v: TextBaseline) -> (f32, f32) {
        text_anchor(R, TextAlignment { horizontal: h, vertical: v })
    }

    #[test]
    fn horizontal_anchors() {
        assert_eq!(anchor(TextAlign::Left, TextBaseline::Top).0, 10.0);
        assert_eq!(anchor(TextAlign::Center, TextBaseline::Top).0, 60.0);
        assert_eq!(anchor(TextAlign::Right, TextBaseline::Top).0, 110.0);
    }

    #[test]
    fn vertical_anchors() {
        assert_eq!(anchor(TextAlign::Left, TextBaseline::Top).1, 20.0);
        assert_eq!(anchor(TextAlign::Left, TextBaseline::Middle).1, 40.0);
        assert_eq!(anchor(TextAlign::Left, TextBaseline::Bottom).1, 60.0);
    }
}
