//! SelectBox widget - a dropdown single/multi select driven by caller state.

pub mod events;
pub mod render;
mod state;

pub use events::KeyCommand;
pub use state::SelectBox;

use crate::option::SelectOption;
use crate::selection::Selection;

/// Everything the caller hands the widget for one render or event.
///
/// Built fresh from caller state each time; the widget keeps no copy of the
/// selection between calls.
#[derive(Debug)]
pub struct SelectBoxProps<'a, M> {
    pub options: &'a [SelectOption],
    pub selection: Selection<'a, M>,
}

impl<'a, M> SelectBoxProps<'a, M> {
    pub fn new(options: &'a [SelectOption], selection: Selection<'a, M>) -> Self {
        Self { options, selection }
    }

    pub fn single(
        options: &'a [SelectOption],
        value: Option<&'a SelectOption>,
        on_change: impl Fn(Option<SelectOption>) -> M + 'a,
    ) -> Self {
        Self::new(options, Selection::single(value, on_change))
    }

    pub fn multiple(
        options: &'a [SelectOption],
        value: &'a [SelectOption],
        on_change: impl Fn(Vec<SelectOption>) -> M + 'a,
    ) -> Self {
        Self::new(options, Selection::multiple(value, on_change))
    }
}
