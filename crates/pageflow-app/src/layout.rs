//! Chrome layout: hit-testable zones for the menu and arrow affordances
//!
//! Computed deterministically from the viewport size and the deck, so the
//! input router and the render layer agree on where everything is without
//! sharing terminal types.

use unicode_width::UnicodeWidthStr;

use pageflow_core::Deck;

/// A rectangular region in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Zone {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// One menu entry and the section index it activates.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub index: usize,
    pub zone: Zone,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeTarget {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Menu(usize),
}

/// Positions of all clickable chrome for one viewport size.
#[derive(Debug, Clone)]
pub struct ChromeLayout {
    pub menu: Vec<MenuEntry>,
    pub arrow_up: Zone,
    pub arrow_down: Zone,
    pub arrow_left: Zone,
    pub arrow_right: Zone,
}

impl ChromeLayout {
    /// Lay out the menu bar (row 0) and the four edge arrows.
    ///
    /// Menu entries that do not fit the width are dropped, not wrapped.
    pub fn compute(width: u16, height: u16, deck: &Deck) -> Self {
        let mut menu = Vec::with_capacity(deck.len());
        let mut x: u16 = 2;
        for (index, section) in deck.sections.iter().enumerate() {
            let w = section.title.as_str().width() as u16 + 2;
            if x + w >= width {
                break;
            }
            menu.push(MenuEntry {
                index,
                zone: Zone {
                    x,
                    y: 0,
                    width: w,
                    height: 1,
                },
            });
            x += w + 1;
        }

        let mid_x = (width / 2).saturating_sub(1);
        let mid_y = height / 2;
        Self {
            menu,
            arrow_up: Zone {
                x: mid_x,
                y: 1,
                width: 3,
                height: 1,
            },
            arrow_down: Zone {
                x: mid_x,
                y: height.saturating_sub(2),
                width: 3,
                height: 1,
            },
            arrow_left: Zone {
                x: 1,
                y: mid_y,
                width: 3,
                height: 1,
            },
            arrow_right: Zone {
                x: width.saturating_sub(4),
                y: mid_y,
                width: 3,
                height: 1,
            },
        }
    }

    /// Map a click position to its chrome target, menu entries first.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ChromeTarget> {
        for entry in &self.menu {
            if entry.zone.contains(x, y) {
                return Some(ChromeTarget::Menu(entry.index));
            }
        }
        if self.arrow_up.contains(x, y) {
            return Some(ChromeTarget::ArrowUp);
        }
        if self.arrow_down.contains(x, y) {
            return Some(ChromeTarget::ArrowDown);
        }
        if self.arrow_left.contains(x, y) {
            return Some(ChromeTarget::ArrowLeft);
        }
        if self.arrow_right.contains(x, y) {
            return Some(ChromeTarget::ArrowRight);
        }
        None
    }
}
