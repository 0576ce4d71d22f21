//! A dropdown select box for `termdom` element trees.
//!
//! The widget is a controlled component: the caller owns the selection and
//! passes it in through [`SelectBoxProps`] on every render and event, and
//! receives proposed new selections back as messages built by its own
//! callback. The widget itself only tracks whether the list is open and which
//! row is highlighted.

pub mod config;
pub mod error;
pub mod option;
pub mod select_box;
pub mod selection;

pub use config::{Glyphs, OptionsFile, SelectBoxConfig, Theme};
pub use error::ConfigError;
pub use option::{OptionValue, SelectOption};
pub use select_box::{KeyCommand, SelectBox, SelectBoxProps};
pub use selection::Selection;
