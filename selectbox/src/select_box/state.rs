//! SelectBox UI state.

use termdom::{KeyListeners, ListenerGuard};

use super::events::{KeyCommand, key_command};
use crate::config::SelectBoxConfig;
use crate::option::SelectOption;

/// Values the key listener closes over. The listener is replaced whenever
/// any of them changes so it never acts on an outdated snapshot.
#[derive(Debug, Clone, PartialEq)]
struct ListenerDeps {
    open: bool,
    highlighted: usize,
    options: Vec<SelectOption>,
}

#[derive(Debug)]
struct KeyBinding {
    deps: ListenerDeps,
    _guard: ListenerGuard<KeyCommand>,
}

/// Parts of the rendered control that react to pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part {
    Control,
    Clear,
    Badge(usize),
    Option(usize),
}

/// A dropdown select box.
///
/// `SelectBox` owns only presentation state: whether the option list is open,
/// which row is highlighted, and whether the control has focus. The selection
/// itself lives with the caller and arrives through
/// [`SelectBoxProps`](super::SelectBoxProps) on every call to
/// [`view`](SelectBox::view) and [`handle_event`](SelectBox::handle_event).
///
/// # Example
///
/// ```ignore
/// let listeners = KeyListeners::new();
/// let mut select = SelectBox::new("fruit");
///
/// loop {
///     for raw in term.poll(None)? {
///         let events = {
///             let props = SelectBoxProps::multiple(&options, &chosen, Msg::Chosen);
///             let root = select.view(&props, &listeners);
///             let layout = term.render(&root)?;
///             focus.process_events(std::slice::from_ref(&raw), &root, layout)
///         };
///
///         for event in &events {
///             let props = SelectBoxProps::multiple(&options, &chosen, Msg::Chosen);
///             let root = select.view(&props, &listeners);
///             if let Some(msg) = select.handle_event(event, &root, &props, &listeners) {
///                 drop(props);
///                 // Apply before the next event so it sees the new selection.
///                 update(&mut chosen, msg);
///             }
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SelectBox {
    id: String,
    config: SelectBoxConfig,
    open: bool,
    highlighted: usize,
    /// Open state as of the last reaction pass.
    was_open: bool,
    focused: bool,
    key_listener: Option<KeyBinding>,
}

impl SelectBox {
    /// Create a select box whose root element has id `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, SelectBoxConfig::default())
    }

    pub fn with_config(id: impl Into<String>, config: SelectBoxConfig) -> Self {
        Self {
            id: id.into(),
            config,
            open: false,
            highlighted: 0,
            was_open: false,
            focused: false,
            key_listener: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SelectBoxConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a key listener is currently held.
    pub fn has_key_listener(&self) -> bool {
        self.key_listener.is_some()
    }

    // -------------------------------------------------------------------------
    // Open/close and highlight
    // -------------------------------------------------------------------------

    pub(crate) fn set_open(&mut self, open: bool) {
        if self.open != open {
            log::debug!("SelectBox {} open={}", self.id, open);
            self.open = open;
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_highlighted(&mut self, index: usize) {
        if self.highlighted != index {
            log::trace!("SelectBox {} highlighted={}", self.id, index);
            self.highlighted = index;
        }
    }

    /// Reconcile derived state after a change.
    ///
    /// Opening resets the highlight to the first row. The highlight is also
    /// kept inside the option list, which the caller may have shortened.
    pub(crate) fn react(&mut self, option_count: usize) {
        if self.open && !self.was_open {
            self.set_highlighted(0);
        }
        self.was_open = self.open;

        let last = option_count.saturating_sub(1);
        if self.highlighted > last {
            self.set_highlighted(last);
        }
    }

    // -------------------------------------------------------------------------
    // Key listener lifecycle
    // -------------------------------------------------------------------------

    /// Make sure the key listener on the root element reflects the current
    /// open state, highlight and options, replacing it if any changed.
    pub(crate) fn sync_key_listener(
        &mut self,
        options: &[SelectOption],
        listeners: &KeyListeners<KeyCommand>,
    ) {
        let current = self.key_listener.as_ref().map(|binding| &binding.deps);
        let up_to_date = current.is_some_and(|deps| {
            deps.open == self.open
                && deps.highlighted == self.highlighted
                && deps.options.as_slice() == options
        });
        if up_to_date {
            return;
        }

        // Release before re-acquiring so two listeners never coexist.
        self.key_listener = None;

        let deps = ListenerDeps {
            open: self.open,
            highlighted: self.highlighted,
            options: options.to_vec(),
        };
        let (open, highlighted, count) = (deps.open, deps.highlighted, deps.options.len());
        let guard = listeners.add(self.id.clone(), move |key, modifiers| {
            key_command(open, highlighted, count, key, modifiers)
        });
        self.key_listener = Some(KeyBinding {
            deps,
            _guard: guard,
        });
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub(crate) fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    pub(crate) fn badge_id(&self, index: usize) -> String {
        format!("{}-badge-{}", self.id, index)
    }

    pub(crate) fn option_id(&self, index: usize) -> String {
        format!("{}-option-{}", self.id, index)
    }

    pub(crate) fn part_id(&self, part: &str) -> String {
        format!("{}-{}", self.id, part)
    }

    /// Which interactive part of this select box `element_id` names, if any.
    pub(crate) fn part_of(&self, element_id: &str) -> Option<Part> {
        if element_id == self.id {
            return Some(Part::Control);
        }
        let rest = element_id.strip_prefix(self.id.as_str())?.strip_prefix('-')?;
        if rest == "clear" {
            return Some(Part::Clear);
        }
        if let Some(index) = rest.strip_prefix("badge-") {
            return index.parse().ok().map(Part::Badge);
        }
        if let Some(index) = rest.strip_prefix("option-") {
            return index.parse().ok().map(Part::Option);
        }
        None
    }
}
