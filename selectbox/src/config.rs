//! Select box configuration and options files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use termdom::{Color, Style};

use crate::error::ConfigError;
use crate::option::{OptionValue, SelectOption};

/// Characters used to draw the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub clear: String,
    pub remove: String,
    pub divider: String,
    pub arrow_closed: String,
    pub arrow_open: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            clear: "×".into(),
            remove: "×".into(),
            divider: "│".into(),
            arrow_closed: "▾".into(),
            arrow_open: "▴".into(),
        }
    }
}

/// Styles for each part of the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub control: Style,
    pub control_focused: Style,
    pub badge: Style,
    pub clear: Style,
    pub divider: Style,
    pub arrow: Style,
    pub option: Style,
    pub option_selected: Style,
    pub option_highlighted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            control: Style::new().background(Color::DarkGrey),
            control_focused: Style::new().background(Color::Blue),
            badge: Style::new()
                .foreground(Color::Black)
                .background(Color::Grey),
            clear: Style::new().foreground(Color::Red),
            divider: Style::new().dim(),
            arrow: Style::new(),
            option: Style::new().background(Color::Black),
            option_selected: Style::new().foreground(Color::Cyan).bold(),
            option_highlighted: Style::new().reverse(),
        }
    }
}

/// Per-instance configuration for a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectBoxConfig {
    /// Minimum width of the control row, in cells.
    pub min_width: u16,
    pub glyphs: Glyphs,
    pub theme: Theme,
}

impl Default for SelectBoxConfig {
    fn default() -> Self {
        Self {
            min_width: 24,
            glyphs: Glyphs::default(),
            theme: Theme::default(),
        }
    }
}

impl SelectBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// An options file: the option list, the selection mode and an optional
/// initial selection given by option values.
///
/// ```json
/// {
///   "multiple": true,
///   "options": [{ "label": "First", "value": 1 }, { "label": "Second", "value": 2 }],
///   "selected": [2]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionsFile {
    #[serde(default)]
    pub multiple: bool,
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub selected: Vec<OptionValue>,
}

impl OptionsFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[config] loaded options file {}", path.display());
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let file: OptionsFile = serde_json::from_str(text)?;
        if file.options.is_empty() {
            return Err(ConfigError::NoOptions);
        }
        if !file.multiple && file.selected.len() > 1 {
            return Err(ConfigError::TooManyValues(file.selected.len()));
        }
        file.initial_selection()?;
        Ok(file)
    }

    /// Options named by `selected`, in the order listed there.
    pub fn initial_selection(&self) -> Result<Vec<SelectOption>, ConfigError> {
        let mut chosen: Vec<SelectOption> = Vec::with_capacity(self.selected.len());
        for value in &self.selected {
            let option = self
                .options
                .iter()
                .find(|o| &o.value == value)
                .ok_or_else(|| ConfigError::UnknownValue(value.to_string()))?;
            if !chosen.contains(option) {
                chosen.push(option.clone());
            }
        }
        Ok(chosen)
    }

    /// Five numbered options in multi-select mode, nothing selected.
    pub fn sample() -> Self {
        let labels = ["First", "Second", "Third", "Fourth", "Fifth"];
        Self {
            multiple: true,
            options: labels
                .iter()
                .zip(1i32..)
                .map(|(label, n)| SelectOption::new(*label, n))
                .collect(),
            selected: Vec::new(),
        }
    }
}
