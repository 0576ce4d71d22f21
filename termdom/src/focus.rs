use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_any, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and turns raw terminal events
/// into targeted [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let next = self.next_focus(root)?;
        self.change_to(next)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let prev = self.prev_focus(root)?;
        self.change_to(prev)
    }

    fn next_focus(&self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let next = match &self.focused {
            None => focusable.first()?,
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => &focusable[(i + 1) % focusable.len()],
                None => focusable.first()?,
            },
        };
        Some(next.clone())
    }

    fn prev_focus(&self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let prev = match &self.focused {
            None => focusable.last()?,
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable.last()?,
                Some(i) => &focusable[i - 1],
            },
        };
        Some(prev.clone())
    }

    fn change_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Move focus to `new` (or nowhere), emitting Blur/Focus events for the
    /// transition. Nothing is emitted if focus does not change.
    fn move_focus(&mut self, new: Option<String>, events: &mut Vec<Event>) {
        if self.focused == new {
            return;
        }
        log::debug!("[focus] Changing focus from {:?} to {:?}", self.focused, new);
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur {
                target: old,
                new_target: new.clone(),
            });
        }
        if let Some(target) = new {
            self.focused = Some(target.clone());
            events.push(Event::Focus { target });
        }
    }

    /// Translate raw crossterm events against the current tree and layout.
    ///
    /// - Tab / BackTab cycle focus and are not delivered as key events.
    /// - Other key presses target the focused element.
    /// - A mouse press moves focus to the focusable element under the pointer
    ///   (or clears it when there is none) before the click is emitted.
    /// - Pointer movement targets the deepest element under the pointer.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab {
                        if let Some(next) = self.next_focus(root) {
                            self.move_focus(Some(next), &mut events);
                        }
                        continue;
                    }

                    if key == Key::BackTab {
                        if let Some(prev) = self.prev_focus(root) {
                            self.move_focus(Some(prev), &mut events);
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    match mouse_event.kind {
                        MouseEventKind::Down(button) => {
                            let focus_target = hit_test_focusable(layout, root, x, y);
                            self.move_focus(focus_target, &mut events);

                            let target = hit_test(layout, root, x, y);
                            events.push(Event::Click {
                                target,
                                x,
                                y,
                                button: button.into(),
                            });
                        }

                        MouseEventKind::Moved => {
                            let target = hit_test_any(layout, root, x, y);
                            log::trace!("[focus] MouseMove at ({}, {}), target={:?}", x, y, target);
                            events.push(Event::MouseMove { target, x, y });
                        }

                        _ => {}
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Ids of all focusable, visible elements in document order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
