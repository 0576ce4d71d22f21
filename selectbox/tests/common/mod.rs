#![allow(dead_code)]

use crossterm::event::Event as CtEvent;
use selectbox::{KeyCommand, SelectBox, SelectBoxProps, SelectOption};
use termdom::{
    Element, Event, FocusState, Key, KeyListeners, Modifiers, MouseButton, Rect, layout,
};

pub const ID: &str = "pick";

/// Screen size used when raw terminal events are hit-tested.
pub const SCREEN: Rect = Rect::from_size(40, 10);

/// Caller-side selection state, also used as the change message.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

pub fn abc() -> Vec<SelectOption> {
    vec![
        SelectOption::new("A", 1),
        SelectOption::new("B", 2),
        SelectOption::new("C", 3),
    ]
}

fn props<'a>(options: &'a [SelectOption], value: &'a Value) -> SelectBoxProps<'a, Value> {
    match value {
        Value::Single(v) => SelectBoxProps::single(options, v.as_ref(), Value::Single),
        Value::Multiple(v) => SelectBoxProps::multiple(options, v, Value::Multiple),
    }
}

/// A minimal controlled host: owns the selection, renders the select box
/// before every event and applies whatever change it proposes.
pub struct Harness {
    pub select: SelectBox,
    pub listeners: KeyListeners<KeyCommand>,
    pub focus: FocusState,
    pub options: Vec<SelectOption>,
    pub value: Value,
    pub changes: Vec<Value>,
}

impl Harness {
    pub fn new(options: Vec<SelectOption>, value: Value) -> Self {
        Self {
            select: SelectBox::new(ID),
            listeners: KeyListeners::new(),
            focus: FocusState::new(),
            options,
            value,
            changes: Vec::new(),
        }
    }

    pub fn multiple(options: Vec<SelectOption>, value: Vec<SelectOption>) -> Self {
        Self::new(options, Value::Multiple(value))
    }

    pub fn single(options: Vec<SelectOption>, value: Option<SelectOption>) -> Self {
        Self::new(options, Value::Single(value))
    }

    pub fn render(&mut self) -> Element {
        let props = props(&self.options, &self.value);
        self.select.view(&props, &self.listeners)
    }

    pub fn send(&mut self, event: Event) -> Option<Value> {
        let message = {
            let props = props(&self.options, &self.value);
            let root = self.select.view(&props, &self.listeners);
            self.select
                .handle_event(&event, &root, &props, &self.listeners)
        };
        if let Some(value) = &message {
            self.changes.push(value.clone());
            self.value = value.clone();
        }
        message
    }

    /// Feed a batch of raw terminal events through the host loop: each raw
    /// event is translated against a fresh layout, and every resulting event
    /// is handled and applied before the next one is looked at.
    pub fn feed(&mut self, batch: &[CtEvent]) -> Vec<Value> {
        let mut changes = Vec::new();
        for raw in batch {
            let root = self.render();
            let result = layout(&root, SCREEN);
            let events = self
                .focus
                .process_events(std::slice::from_ref(raw), &root, &result);
            changes.extend(events.into_iter().filter_map(|event| self.send(event)));
        }
        changes
    }

    pub fn press(&mut self, key: Key) -> Option<Value> {
        self.send(key_on(ID, key))
    }

    pub fn click(&mut self, target: &str) -> Option<Value> {
        self.send(click_on(target))
    }

    pub fn hover(&mut self, target: &str) -> Option<Value> {
        self.send(Event::MouseMove {
            target: Some(target.to_string()),
            x: 0,
            y: 0,
        })
    }

    pub fn focus(&mut self) {
        self.send(Event::Focus { target: ID.into() });
    }

    pub fn blur(&mut self) {
        self.send(Event::Blur {
            target: ID.into(),
            new_target: None,
        });
    }

    /// Open the list with a click on the control body.
    pub fn open(&mut self) {
        self.click(ID);
        assert!(self.select.is_open());
    }
}

pub fn key_on(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::new(),
    }
}

pub fn click_on(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

pub fn option_id(index: usize) -> String {
    format!("{ID}-option-{index}")
}

pub fn badge_id(index: usize) -> String {
    format!("{ID}-badge-{index}")
}

pub fn clear_id() -> String {
    format!("{ID}-clear")
}
