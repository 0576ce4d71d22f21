mod common;

use common::{Harness, ID, abc, badge_id, option_id};
use selectbox::{SelectBox, SelectBoxConfig, SelectBoxProps, Theme};
use termdom::{
    Buffer, Element, Key, KeyListeners, Rect, find_element, layout, render_to_buffer,
};

fn draw(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

fn find<'a>(root: &'a Element, id: &str) -> &'a Element {
    find_element(root, id).unwrap_or_else(|| panic!("no element {id}"))
}

#[test]
fn test_options_present_but_hidden_while_closed() {
    let mut h = Harness::single(abc(), None);
    let root = h.render();

    let list = find(&root, &format!("{ID}-options"));
    assert!(list.hidden);
    assert!(!list.has_class("show"));
    assert_eq!(list.child_elements().len(), 3);

    h.open();
    let root = h.render();
    let list = find(&root, &format!("{ID}-options"));
    assert!(!list.hidden);
    assert!(list.has_class("show"));
}

#[test]
fn test_rows_carry_selected_and_highlighted_classes() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), vec![opts[2].clone()]);
    h.open();
    h.press(Key::Down);
    let root = h.render();

    let first = find(&root, &option_id(0));
    assert!(first.has_class("option"));
    assert!(!first.has_class("selected"));
    assert!(!first.has_class("highlighted"));

    let second = find(&root, &option_id(1));
    assert!(second.has_class("highlighted"));
    assert!(!second.has_class("selected"));

    let third = find(&root, &option_id(2));
    assert!(third.has_class("selected"));
    assert_eq!(third.text_content(), Some("C"));
}

#[test]
fn test_highlight_style_applied() {
    let mut h = Harness::single(abc(), None);
    h.open();
    let root = h.render();
    let theme = Theme::default();

    assert!(find(&root, &option_id(0)).style.text_style.reverse);
    assert_eq!(find(&root, &option_id(1)).style, theme.option);
}

#[test]
fn test_multi_renders_one_badge_per_selected_option() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), vec![opts[2].clone(), opts[0].clone()]);
    let root = h.render();

    let values = find(&root, &format!("{ID}-values"));
    assert_eq!(values.child_elements().len(), 2);

    let badge = find(&root, &badge_id(0));
    assert!(badge.clickable);
    assert!(badge.has_class("badge"));
    assert_eq!(badge.text_content(), Some("C ×"));
    assert_eq!(find(&root, &badge_id(1)).text_content(), Some("A ×"));
}

#[test]
fn test_single_renders_label_or_nothing() {
    let opts = abc();
    let mut h = Harness::single(opts.clone(), Some(opts[1].clone()));
    let root = h.render();
    assert_eq!(
        find(&root, &format!("{ID}-label")).text_content(),
        Some("B")
    );

    let mut h = Harness::single(opts, None);
    let root = h.render();
    assert!(find(&root, &format!("{ID}-values")).child_elements().is_empty());
    assert!(find_element(&root, &format!("{ID}-label")).is_none());
}

#[test]
fn test_root_is_focusable_and_tracks_focus_class() {
    let mut h = Harness::single(abc(), None);
    let root = h.render();
    assert_eq!(root.id, ID);
    assert!(root.focusable);
    assert!(!root.has_class("focused"));

    h.focus();
    assert!(h.render().has_class("focused"));
}

#[test]
fn test_drawn_control_and_list() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), vec![opts[0].clone()]);
    let buf = draw(&h.render(), 30, 4);
    let top = buf.line(0);
    assert!(top.starts_with("A ×"), "{top:?}");
    assert!(top.contains('▾'));
    assert_eq!(buf.line(1).trim(), "");

    h.open();
    let buf = draw(&h.render(), 30, 4);
    assert!(buf.line(0).contains('▴'));
    assert!(buf.line(1).starts_with('A'));
    assert!(buf.line(2).starts_with('B'));
    assert!(buf.line(3).starts_with('C'));
}

#[test]
fn test_custom_config_min_width() {
    let opts = abc();
    let listeners = KeyListeners::new();
    let mut select = SelectBox::with_config(ID, SelectBoxConfig::new().min_width(40));
    let props = SelectBoxProps::single(&opts, None, |v| v);
    let root = select.view(&props, &listeners);

    let result = layout(&root, Rect::from_size(80, 10));
    assert_eq!(result.get(ID).map(|r| r.width), Some(40));
}
