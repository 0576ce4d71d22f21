//! Element tree for the SelectBox widget.

use termdom::text::display_width;
use termdom::{Element, KeyListeners};

use super::SelectBoxProps;
use super::events::KeyCommand;
use super::state::SelectBox;
use crate::selection::Selection;

impl SelectBox {
    /// Build the element tree for the current props and UI state.
    ///
    /// Also refreshes the key listener on the root element when the open
    /// state, highlight or options changed since it was registered.
    ///
    /// Tree shape (ids relative to the select box id `s`):
    ///
    /// ```text
    /// s                   col, focusable, clickable
    /// ├─ s-control        row
    /// │  ├─ s-values      row of badges (multi) or the selected label (single)
    /// │  ├─ s-clear       clickable
    /// │  ├─ s-divider
    /// │  └─ s-arrow
    /// └─ s-options        col, hidden while closed
    ///    └─ s-option-N    clickable, classes: option [selected] [highlighted]
    /// ```
    pub fn view<M>(
        &mut self,
        props: &SelectBoxProps<'_, M>,
        listeners: &KeyListeners<KeyCommand>,
    ) -> Element {
        self.react(props.options.len());
        self.sync_key_listener(props.options, listeners);

        log::trace!(
            "SelectBox::view id={} open={} highlighted={} options={}",
            self.id(),
            self.is_open(),
            self.highlighted(),
            props.options.len()
        );

        Element::col()
            .id(self.id())
            .class("select-box")
            .class_if("focused", self.is_focused())
            .focusable(true)
            .clickable(true)
            .child(self.render_control(props))
            .child(self.render_options(props))
    }

    fn render_control<M>(&self, props: &SelectBoxProps<'_, M>) -> Element {
        let config = self.config();
        let glyphs = &config.glyphs;
        let theme = &config.theme;

        let style = if self.is_focused() {
            theme.control.merge(theme.control_focused)
        } else {
            theme.control
        };

        // Values take whatever the glyphs and gaps leave of the minimum width.
        let chrome = display_width(&glyphs.clear)
            + display_width(&glyphs.divider)
            + display_width(&glyphs.arrow_open).max(display_width(&glyphs.arrow_closed))
            + 3;
        let values_width = config.min_width.saturating_sub(chrome);

        let arrow = if self.is_open() {
            &glyphs.arrow_open
        } else {
            &glyphs.arrow_closed
        };

        Element::row()
            .id(self.part_id("control"))
            .class("control")
            .gap(1)
            .style(style)
            .child(self.render_values(props).min_width(values_width))
            .child(
                Element::text(glyphs.clear.as_str())
                    .id(self.clear_id())
                    .class("clear")
                    .clickable(true)
                    .style(style.merge(theme.clear)),
            )
            .child(
                Element::text(glyphs.divider.as_str())
                    .id(self.part_id("divider"))
                    .class("divider")
                    .style(style.merge(theme.divider)),
            )
            .child(
                Element::text(arrow.as_str())
                    .id(self.part_id("arrow"))
                    .class("arrow")
                    .style(style.merge(theme.arrow)),
            )
    }

    fn render_values<M>(&self, props: &SelectBoxProps<'_, M>) -> Element {
        let config = self.config();
        let values = Element::row()
            .id(self.part_id("values"))
            .class("values")
            .gap(1);

        match &props.selection {
            Selection::Multiple { value, .. } => {
                values.children(value.iter().enumerate().map(|(i, option)| {
                    Element::text(format!("{} {}", option.label, config.glyphs.remove))
                        .id(self.badge_id(i))
                        .class("badge")
                        .clickable(true)
                        .style(config.theme.badge)
                }))
            }
            Selection::Single { value, .. } => match value {
                Some(option) => values.child(
                    Element::text(option.label.as_str())
                        .id(self.part_id("label"))
                        .class("label"),
                ),
                None => values,
            },
        }
    }

    fn render_options<M>(&self, props: &SelectBoxProps<'_, M>) -> Element {
        let theme = &self.config().theme;

        let rows = props.options.iter().enumerate().map(|(i, option)| {
            let selected = props.selection.is_selected(option);
            let highlighted = self.highlighted() == i;

            let mut style = theme.option;
            if selected {
                style = style.merge(theme.option_selected);
            }
            if highlighted {
                style = style.merge(theme.option_highlighted);
            }

            Element::text(option.label.as_str())
                .id(self.option_id(i))
                .class("option")
                .class_if("selected", selected)
                .class_if("highlighted", highlighted)
                .clickable(true)
                .style(style)
        });

        Element::col()
            .id(self.part_id("options"))
            .class("options")
            .class_if("show", self.is_open())
            .hidden(!self.is_open())
            .children(rows)
    }
}
