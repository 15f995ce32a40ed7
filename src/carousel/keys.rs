//! Key bindings for carousel navigation.
//!
//! Horizontal carousels step with `←/h` and `→/l`, vertical ones with `↑/k`
//! and `↓/j`. Both jump with `g/home` and `G/end`.

use crate::config::Orientation;
use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for previous/next and jumping to either end.
#[derive(Debug, Clone)]
pub struct CarouselKeyMap {
    /// Activate the "previous" control.
    pub prev: key::Binding,
    /// Activate the "next" control.
    pub next: key::Binding,
    /// Jump to the first slide.
    pub first: key::Binding,
    /// Jump to the last slide.
    pub last: key::Binding,
}

impl CarouselKeyMap {
    /// Bindings suited to the orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        let (prev, next) = match orientation {
            Orientation::Horizontal => (
                key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                    .with_help("←/h", "prev"),
                key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                    .with_help("→/l", "next"),
            ),
            Orientation::Vertical => (
                key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "prev"),
                key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                    .with_help("↓/j", "next"),
            ),
        };
        Self {
            prev,
            next,
            first: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first"),
            last: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last"),
        }
    }
}

impl Default for CarouselKeyMap {
    fn default() -> Self {
        Self::for_orientation(Orientation::Horizontal)
    }
}

impl key::KeyMap for CarouselKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev, &self.next]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev, &self.next], vec![&self.first, &self.last]]
    }
}
