use super::model::Model;
use crate::dimensions::Measurable;

impl<T: Measurable> Model<T> {
    /// Renders the controls: `prev  indicators  next` on one line for
    /// horizontal carousels, stacked for vertical ones, or the empty state
    /// when there are no slides. Disabled buttons are dimmed.
    pub fn view(&self) -> String {
        if self.slides.is_empty() {
            return self.empty_view();
        }

        let config = self.navigator.config();
        let mut parts = Vec::with_capacity(3);
        let show_buttons = config.show_navigation || config.single_item_mode;
        let (prev_icon, next_icon) = config.navigation_style.icons.resolve(config.orientation);

        if show_buttons {
            parts.push(self.button(prev_icon, self.navigator.prev_enabled()));
        }
        if config.show_indicators {
            parts.push(self.indicators_view());
        }
        if show_buttons {
            parts.push(self.button(next_icon, self.navigator.next_enabled()));
        }

        let separator = if config.is_vertical() { "\n" } else { " " };
        parts.join(separator)
    }

    fn button(&self, icon: &str, enabled: bool) -> String {
        if enabled {
            self.styles.button.render(icon)
        } else {
            self.styles.button_disabled.render(icon)
        }
    }

    fn indicators_view(&self) -> String {
        let style = &self.navigator.config().indicator_style;
        self.navigator
            .indicators()
            .iter()
            .map(|indicator| {
                if indicator.active {
                    self.styles.active_indicator.render(&style.active_glyph)
                } else {
                    self.styles.inactive_indicator.render(&style.inactive_glyph)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn empty_view(&self) -> String {
        let empty = &self.navigator.config().empty_state;
        let text = if empty.hide_icon || empty.icon.is_empty() {
            empty.text.clone()
        } else {
            format!("{} {}", empty.icon, empty.text)
        };
        self.styles.empty_state.render(&text)
    }
}
