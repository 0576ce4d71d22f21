//! Interactive select box in the terminal.
//!
//! ```text
//! cargo run -p selectbox --example demo [options.json]
//! ```
//!
//! Tab focuses the control; Enter/Space/arrows/Escape drive it; the mouse
//! works too. Ctrl+C or `q` quits. Logs go to `selectbox-demo.log`.

use std::error::Error;
use std::fs::File;

use selectbox::{KeyCommand, OptionsFile, SelectBox, SelectBoxProps, SelectOption};
use simplelog::{Config, LevelFilter, WriteLogger};
use termdom::{Element, Event, FocusState, Key, KeyListeners, Style, Terminal};

enum Msg {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

/// Owns the selection; the select box only proposes changes to it.
struct App {
    options: Vec<SelectOption>,
    multiple: bool,
    chosen: Vec<SelectOption>,
}

impl App {
    fn props(&self) -> SelectBoxProps<'_, Msg> {
        if self.multiple {
            SelectBoxProps::multiple(&self.options, &self.chosen, Msg::Multiple)
        } else {
            SelectBoxProps::single(&self.options, self.chosen.first(), Msg::Single)
        }
    }

    fn update(&mut self, msg: Msg) {
        self.chosen = match msg {
            Msg::Single(value) => value.into_iter().collect(),
            Msg::Multiple(values) => values,
        };
        log::info!("selection is now {}", self.summary());
    }

    fn summary(&self) -> String {
        if self.chosen.is_empty() {
            return "(nothing)".into();
        }
        self.chosen
            .iter()
            .map(|o| format!("{}={}", o.label, o.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn wants_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key { key: Key::Char('c'), modifiers, .. } if modifiers.ctrl
    ) || matches!(event, Event::Key { key: Key::Char('q'), .. })
}

fn ui(app: &App, select: &mut SelectBox, listeners: &KeyListeners<KeyCommand>) -> Element {
    let props = app.props();
    Element::col()
        .id("root")
        .gap(1)
        .child(Element::text("selectbox demo (Tab to focus, q to quit)").style(Style::new().bold()))
        .child(select.view(&props, listeners))
        .child(Element::text(format!("Selected: {}", app.summary())).style(Style::new().dim()))
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("selectbox-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let file = match std::env::args().nth(1) {
        Some(path) => OptionsFile::load(path)?,
        None => OptionsFile::sample(),
    };
    let mut app = App {
        chosen: file.initial_selection()?,
        options: file.options,
        multiple: file.multiple,
    };
    log::info!(
        "starting with {} options, multiple={}",
        app.options.len(),
        app.multiple
    );

    let listeners: KeyListeners<KeyCommand> = KeyListeners::new();
    let mut select = SelectBox::new("select");
    let mut focus = FocusState::new();
    let mut term = Terminal::new()?;

    loop {
        term.render(&ui(&app, &mut select, &listeners))?;

        // Each raw event sees the tree and selection left by the previous one.
        for raw in term.poll(None)? {
            let root = ui(&app, &mut select, &listeners);
            let layout = term.render(&root)?;
            let events = focus.process_events(std::slice::from_ref(&raw), &root, layout);

            for event in &events {
                if wants_quit(event) {
                    return Ok(());
                }
                let root = ui(&app, &mut select, &listeners);
                let props = app.props();
                if let Some(msg) = select.handle_event(event, &root, &props, &listeners) {
                    drop(props);
                    app.update(msg);
                }
            }
        }
    }
}
