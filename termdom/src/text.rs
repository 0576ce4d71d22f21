use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a single character in terminal cells.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string in terminal cells, saturated to `u16`.
pub fn display_width(s: &str) -> u16 {
    s.width().min(u16::MAX as usize) as u16
}
