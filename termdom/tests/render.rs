use termdom::{layout, render_to_buffer, Buffer, Color, Element, Rect, Style};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

#[test]
fn test_render_text() {
    let root = Element::text("Hello");
    let buf = render(&root, 10, 1);
    assert_eq!(buf.line(0), "Hello     ");
}

#[test]
fn test_render_row_and_column() {
    let root = Element::col()
        .child(
            Element::row()
                .gap(1)
                .child(Element::text("a"))
                .child(Element::text("b")),
        )
        .child(Element::text("c"));
    let buf = render(&root, 4, 2);
    assert_eq!(buf.line(0), "a b ");
    assert_eq!(buf.line(1), "c   ");
}

#[test]
fn test_hidden_element_not_drawn() {
    let root = Element::col()
        .child(Element::text("shown"))
        .child(Element::text("secret").hidden(true));
    let buf = render(&root, 8, 2);
    assert_eq!(buf.line(1), "        ");
}

#[test]
fn test_text_style_applied_to_cells() {
    let root = Element::text("x").style(
        Style::new()
            .foreground(Color::Red)
            .background(Color::Blue)
            .bold(),
    );
    let buf = render(&root, 2, 1);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'x');
    assert_eq!(cell.fg, Color::Red);
    assert_eq!(cell.bg, Color::Blue);
    assert!(cell.style.bold);
    // Outside the element the defaults remain
    assert_eq!(buf.get(1, 0).unwrap().bg, Color::Reset);
}

#[test]
fn test_stretched_row_styled_across_width() {
    let root = Element::col()
        .child(Element::text("long line"))
        .child(Element::text("x").style(Style::new().reverse()));
    let buf = render(&root, 12, 2);
    for x in 0..9 {
        assert!(buf.get(x, 1).unwrap().style.reverse, "cell {x} not reversed");
    }
    assert!(!buf.get(9, 1).unwrap().style.reverse);
}

#[test]
fn test_wide_chars_mark_continuation() {
    let root = Element::text("日x");
    let buf = render(&root, 4, 1);
    assert_eq!(buf.get(0, 0).unwrap().char, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
}

#[test]
fn test_buffer_diff_reports_changed_cells() {
    let a = render(&Element::text("ab"), 3, 1);
    let b = render(&Element::text("ac"), 3, 1);
    let changed: Vec<(u16, u16)> = a.diff(&b).map(|(x, y, _)| (x, y)).collect();
    assert_eq!(changed, vec![(1, 0)]);
}

#[test]
fn test_combining_marks_take_no_cell() {
    let root = Element::row()
        .child(Element::text("e\u{301}tude"))
        .child(Element::text("!"));
    let buf = render(&root, 8, 1);
    assert_eq!(buf.line(0), "etude!  ");
}
