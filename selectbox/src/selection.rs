//! The two selection shapes a select box can be driven with.

use std::fmt;

use crate::option::SelectOption;

type OnChange<'a, T, M> = Box<dyn Fn(T) -> M + 'a>;

/// Current selection plus the callback that turns a proposed new selection
/// into a caller message.
///
/// The variant fixes both the shape of the value and the shape of the change
/// notification, so a multi-select can never be handed a single value.
pub enum Selection<'a, M> {
    /// Zero or one selected option.
    Single {
        value: Option<&'a SelectOption>,
        on_change: OnChange<'a, Option<SelectOption>, M>,
    },
    /// Selected options in selection order, without duplicates.
    Multiple {
        value: &'a [SelectOption],
        on_change: OnChange<'a, Vec<SelectOption>, M>,
    },
}

impl<'a, M> Selection<'a, M> {
    pub fn single(
        value: Option<&'a SelectOption>,
        on_change: impl Fn(Option<SelectOption>) -> M + 'a,
    ) -> Self {
        Selection::Single {
            value,
            on_change: Box::new(on_change),
        }
    }

    pub fn multiple(
        value: &'a [SelectOption],
        on_change: impl Fn(Vec<SelectOption>) -> M + 'a,
    ) -> Self {
        Selection::Multiple {
            value,
            on_change: Box::new(on_change),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple { .. })
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        match self {
            Selection::Single { value, .. } => *value == Some(option),
            Selection::Multiple { value, .. } => value.contains(option),
        }
    }

    /// Change message for choosing `option`.
    ///
    /// Multi-select toggles membership: a selected option is removed, any
    /// other is appended. Single-select replaces the value, and choosing the
    /// current value is not a change.
    pub fn select(&self, option: &SelectOption) -> Option<M> {
        match self {
            Selection::Single { value, on_change } => {
                if *value == Some(option) {
                    return None;
                }
                Some(on_change(Some(option.clone())))
            }
            Selection::Multiple { value, on_change } => {
                let next = if value.contains(option) {
                    value.iter().filter(|o| *o != option).cloned().collect()
                } else {
                    let mut next = value.to_vec();
                    next.push(option.clone());
                    next
                };
                Some(on_change(next))
            }
        }
    }

    /// Change message for emptying the selection.
    pub fn clear(&self) -> M {
        match self {
            Selection::Single { on_change, .. } => on_change(None),
            Selection::Multiple { on_change, .. } => on_change(Vec::new()),
        }
    }
}

impl<M> fmt::Debug for Selection<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single { value, .. } => {
                f.debug_struct("Single").field("value", value).finish()
            }
            Selection::Multiple { value, .. } => {
                f.debug_struct("Multiple").field("value", value).finish()
            }
        }
    }
}
