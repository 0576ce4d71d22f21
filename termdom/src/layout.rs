use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::style::Direction;
use crate::text::display_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping area of two rects, or an empty rect at `self`'s origin.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Rect::new(self.x, self.y, 0, 0);
        }
        Rect::new(x, y, right - x, bottom - y)
    }
}

/// Element id to on-screen rect. Hidden elements and elements fully outside
/// the available area have no entry.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }
}

/// Lay out `root` at the top-left of `available`.
///
/// Rows place children left to right, columns top to bottom, separated by
/// `gap`. Column children are stretched to the column's width so row
/// highlights span the whole list.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (width, height) = measure(root);
    let rect = Rect::new(available.x, available.y, width, height);
    place(root, rect, &available, &mut result);
    result
}

/// Intrinsic (width, height) of an element.
pub fn measure(element: &Element) -> (u16, u16) {
    if element.hidden {
        return (0, 0);
    }

    let (width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text), 1),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| !c.hidden)
                .map(measure)
                .collect();
            let gaps = element.gap.saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => (
                    sizes
                        .iter()
                        .fold(0u16, |acc, (w, _)| acc.saturating_add(*w))
                        .saturating_add(gaps),
                    sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes
                        .iter()
                        .fold(0u16, |acc, (_, h)| acc.saturating_add(*h))
                        .saturating_add(gaps),
                ),
            }
        }
    };

    (width.max(element.min_width.unwrap_or(0)), height)
}

fn place(element: &Element, rect: Rect, clip: &Rect, result: &mut LayoutResult) {
    if element.hidden {
        return;
    }

    let visible = rect.intersection(clip);
    if visible.is_empty() {
        log::trace!("[layout] {} clipped out at {:?}", element.id, rect);
        return;
    }
    result.insert(element.id.clone(), visible);

    let mut cursor_x = rect.x;
    let mut cursor_y = rect.y;
    for child in element.child_elements().iter().filter(|c| !c.hidden) {
        let (w, h) = measure(child);
        match element.direction {
            Direction::Row => {
                place(child, Rect::new(cursor_x, cursor_y, w, h), clip, result);
                cursor_x = cursor_x.saturating_add(w).saturating_add(element.gap);
            }
            Direction::Column => {
                let width = w.max(rect.width);
                place(child, Rect::new(cursor_x, cursor_y, width, h), clip, result);
                cursor_y = cursor_y.saturating_add(h).saturating_add(element.gap);
            }
        }
    }
}
