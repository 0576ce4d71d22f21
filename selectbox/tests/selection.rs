mod common;

use common::{Harness, Value, abc, badge_id, clear_id, option_id};
use selectbox::SelectOption;
use termdom::Key;

// ============================================================================
// Multi-select
// ============================================================================

#[test]
fn test_clicking_unselected_option_appends_it() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), vec![opts[1].clone()]);
    h.open();

    let change = h.click(&option_id(0));
    assert_eq!(
        change,
        Some(Value::Multiple(vec![opts[1].clone(), opts[0].clone()]))
    );
}

#[test]
fn test_clicking_selected_option_removes_exactly_it() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), opts.clone());
    h.open();

    let change = h.click(&option_id(1));
    assert_eq!(
        change,
        Some(Value::Multiple(vec![opts[0].clone(), opts[2].clone()]))
    );
}

#[test]
fn test_selection_order_follows_clicks_without_duplicates() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), Vec::new());

    for i in [2, 0, 1] {
        h.open();
        h.click(&option_id(i));
    }
    assert_eq!(
        h.value,
        Value::Multiple(vec![opts[2].clone(), opts[0].clone(), opts[1].clone()])
    );

    // Selecting again toggles off rather than duplicating
    h.open();
    h.click(&option_id(0));
    assert_eq!(
        h.value,
        Value::Multiple(vec![opts[2].clone(), opts[1].clone()])
    );
}

#[test]
fn test_clicking_option_closes_list() {
    let opts = abc();
    let mut h = Harness::multiple(opts, Vec::new());
    h.open();

    h.click(&option_id(0));
    assert!(!h.select.is_open());
}

#[test]
fn test_clicking_badge_deselects_without_toggling() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), vec![opts[0].clone(), opts[2].clone()]);

    let change = h.click(&badge_id(1));
    assert_eq!(change, Some(Value::Multiple(vec![opts[0].clone()])));
    assert!(!h.select.is_open());

    h.open();
    h.click(&badge_id(0));
    assert_eq!(h.value, Value::Multiple(Vec::new()));
    assert!(h.select.is_open());
}

#[test]
fn test_enter_toggles_highlighted_option_membership() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), vec![opts[0].clone()]);

    h.press(Key::Enter);
    let change = h.press(Key::Enter);
    assert_eq!(change, Some(Value::Multiple(Vec::new())));
}

// ============================================================================
// Single-select
// ============================================================================

#[test]
fn test_single_selecting_current_value_is_silent() {
    let opts = abc();
    let mut h = Harness::single(opts.clone(), Some(opts[1].clone()));
    h.open();

    assert_eq!(h.click(&option_id(1)), None);
    assert!(h.changes.is_empty());
}

#[test]
fn test_single_selecting_other_value_reports_once() {
    let opts = abc();
    let mut h = Harness::single(opts.clone(), Some(opts[1].clone()));
    h.open();

    assert_eq!(
        h.click(&option_id(2)),
        Some(Value::Single(Some(opts[2].clone())))
    );
    assert_eq!(h.changes.len(), 1);
}

#[test]
fn test_single_space_commits_highlight() {
    let opts = abc();
    let mut h = Harness::single(opts.clone(), None);

    h.press(Key::Char(' '));
    h.press(Key::Down);
    let change = h.press(Key::Char(' '));
    assert_eq!(change, Some(Value::Single(Some(opts[1].clone()))));
    assert!(!h.select.is_open());
}

#[test]
fn test_equal_values_with_different_labels_are_distinct() {
    let opts = vec![SelectOption::new("One", 1), SelectOption::new("Uno", 1)];
    let mut h = Harness::multiple(opts.clone(), vec![opts[0].clone()]);
    h.open();

    h.click(&option_id(1));
    assert_eq!(h.value, Value::Multiple(opts));
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_single_reports_none_and_keeps_open_state() {
    let opts = abc();
    let mut h = Harness::single(opts.clone(), Some(opts[1].clone()));

    assert_eq!(h.click(&clear_id()), Some(Value::Single(None)));
    assert_eq!(h.changes.len(), 1);
    assert!(!h.select.is_open());

    h.open();
    h.click(&clear_id());
    assert!(h.select.is_open());
}

#[test]
fn test_clear_multiple_reports_empty_regardless_of_state() {
    let opts = abc();
    let mut h = Harness::multiple(opts.clone(), opts.clone());
    assert_eq!(h.click(&clear_id()), Some(Value::Multiple(Vec::new())));

    // Already empty: still reported
    assert_eq!(h.click(&clear_id()), Some(Value::Multiple(Vec::new())));
    assert_eq!(h.changes.len(), 2);
}

#[test]
fn test_clear_when_single_unset_still_reports() {
    let mut h = Harness::single(abc(), None);
    assert_eq!(h.click(&clear_id()), Some(Value::Single(None)));
}
