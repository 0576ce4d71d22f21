use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::style::Color;
use crate::text::char_width;

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    if element.hidden {
        return;
    }
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    if let Some(bg) = element.style.background {
        fill_rect(buf, *rect, bg);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, *rect, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Color) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let style = element.style;
    let mut x = rect.x;
    let y = rect.y;

    // Pad text rows to the full rect so reverse/background styles cover it.
    let padded = text.chars().chain(std::iter::repeat(' '));
    for ch in padded {
        if x >= rect.right() {
            break;
        }
        // Combining marks have no cell of their own; layout measures them as 0.
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x + width > rect.right() {
            break;
        }

        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.wide_continuation = false;
            cell.style = style.text_style;
            if let Some(fg) = style.foreground {
                cell.fg = fg;
            }
            if let Some(bg) = style.background {
                cell.bg = bg;
            }
        }
        for dx in 1..width {
            if let Some(cell) = buf.get_mut(x + dx, y) {
                cell.wide_continuation = true;
            }
        }

        x += width;
    }
}
