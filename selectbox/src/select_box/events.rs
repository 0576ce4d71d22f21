//! Event handling for the SelectBox widget.

use termdom::{Element, Event, Key, KeyListeners, Modifiers, Propagation, bubble};

use super::SelectBoxProps;
use super::state::{Part, SelectBox};
use crate::selection::Selection;

/// What a key press on the control asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Open,
    Close,
    /// Close the list and select the option at this index.
    CloseAndCommit(usize),
    /// Move the highlight to this index.
    Highlight(usize),
}

/// Keyboard state machine for a select box with the given state.
///
/// | Key         | Closed | Open                                  |
/// |-------------|--------|---------------------------------------|
/// | Enter/Space | open   | close, commit highlighted option      |
/// | Up/Down     | open   | move highlight by one, no wraparound  |
/// | Escape      | -      | close                                 |
///
/// Keys held with Ctrl or Alt are ignored.
pub(crate) fn key_command(
    open: bool,
    highlighted: usize,
    option_count: usize,
    key: Key,
    modifiers: Modifiers,
) -> Option<KeyCommand> {
    if modifiers.ctrl || modifiers.alt {
        return None;
    }

    match key {
        Key::Enter | Key::Char(' ') => {
            if open {
                Some(KeyCommand::CloseAndCommit(highlighted))
            } else {
                Some(KeyCommand::Open)
            }
        }
        Key::Up | Key::Down => {
            if !open {
                return Some(KeyCommand::Open);
            }
            let next = if key == Key::Down {
                highlighted.checked_add(1).filter(|&i| i < option_count)
            } else {
                highlighted.checked_sub(1)
            };
            next.map(KeyCommand::Highlight)
        }
        Key::Escape if open => Some(KeyCommand::Close),
        _ => None,
    }
}

impl SelectBox {
    /// Handle one event against the tree this select box was rendered into.
    ///
    /// Returns the caller's change message when the event changes the
    /// selection. UI state (open, highlight, focus) is updated in place.
    pub fn handle_event<M>(
        &mut self,
        event: &Event,
        root: &Element,
        props: &SelectBoxProps<'_, M>,
        listeners: &KeyListeners<KeyCommand>,
    ) -> Option<M> {
        let for_self = event.target() == Some(self.id());
        let message = match event {
            Event::Key { .. } if for_self => {
                self.sync_key_listener(props.options, listeners);
                let mut message = None;
                for command in listeners.dispatch(event) {
                    message = self.apply_key_command(command, props).or(message);
                }
                message
            }
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(root, target, props),
            Event::MouseMove {
                target: Some(target),
                ..
            } => {
                self.on_hover(root, target);
                None
            }
            Event::Focus { .. } if for_self => {
                self.set_focused(true);
                None
            }
            Event::Blur { .. } if for_self => {
                self.set_focused(false);
                self.set_open(false);
                None
            }
            _ => None,
        };

        self.react(props.options.len());
        message
    }

    fn apply_key_command<M>(
        &mut self,
        command: KeyCommand,
        props: &SelectBoxProps<'_, M>,
    ) -> Option<M> {
        log::debug!("SelectBox {} key command {:?}", self.id(), command);
        match command {
            KeyCommand::Open => {
                self.set_open(true);
                None
            }
            KeyCommand::Close => {
                self.set_open(false);
                None
            }
            KeyCommand::CloseAndCommit(index) => {
                self.set_open(false);
                let option = props.options.get(index)?;
                props.selection.select(option)
            }
            KeyCommand::Highlight(index) => {
                self.set_highlighted(index);
                None
            }
        }
    }

    fn on_click<M>(
        &mut self,
        root: &Element,
        target: &str,
        props: &SelectBoxProps<'_, M>,
    ) -> Option<M> {
        let mut parts = Vec::new();
        bubble(root, target, |element| match self.part_of(&element.id) {
            // Clear and badge clicks must not also toggle the list.
            Some(part @ (Part::Clear | Part::Badge(_))) => {
                parts.push(part);
                Propagation::Stop
            }
            Some(part) => {
                parts.push(part);
                Propagation::Continue
            }
            None => Propagation::Continue,
        });

        let mut message = None;
        for part in parts {
            log::debug!("SelectBox {} click on {:?}", self.id(), part);
            let change = match part {
                Part::Control => {
                    self.toggle();
                    None
                }
                Part::Clear => Some(props.selection.clear()),
                Part::Badge(index) => match &props.selection {
                    Selection::Multiple { value, .. } => value
                        .get(index)
                        .and_then(|option| props.selection.select(option)),
                    Selection::Single { .. } => None,
                },
                Part::Option(index) => props
                    .options
                    .get(index)
                    .and_then(|option| props.selection.select(option)),
            };
            message = change.or(message);
        }
        message
    }

    fn on_hover(&mut self, root: &Element, target: &str) {
        let mut hovered = None;
        bubble(root, target, |element| match self.part_of(&element.id) {
            Some(Part::Option(index)) => {
                hovered = Some(index);
                Propagation::Stop
            }
            _ => Propagation::Continue,
        });

        if let Some(index) = hovered {
            self.set_highlighted(index);
        }
    }
}
