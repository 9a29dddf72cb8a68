use std::num::NonZeroUsize;

use super::layout::{slide_layout, SlideLayout};

/// Single owner of the carousel's active index and caption overlay flag.
///
/// Every change of the active index bumps `revision` and hides the overlay.
/// A reveal only takes effect when it carries the current revision, so a
/// reveal scheduled for an index that has since been replaced is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    active_index: usize,
    overlay_visible: bool,
    revision: u64,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            active_index: 0,
            overlay_visible: false,
            revision: 0,
        }
    }

    pub fn item_count(&self) -> NonZeroUsize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Moves one item forward, wrapping past the end. Returns the new revision.
    pub fn advance(&mut self) -> u64 {
        self.set_active(self.active_index + 1)
    }

    /// Moves one item back, wrapping before the start. Returns the new revision.
    pub fn retreat(&mut self) -> u64 {
        let previous = match self.active_index {
            0 => self.len.get() - 1,
            index => index - 1,
        };
        self.set_active(previous)
    }

    /// Makes `index` (taken modulo the item count) the active item.
    pub fn set_active(&mut self, index: usize) -> u64 {
        self.active_index = index % self.len.get();
        self.overlay_visible = false;
        self.revision = self.revision.wrapping_add(1);
        self.revision
    }

    /// Shows the caption overlay if `revision` is still current.
    ///
    /// Returns whether the overlay became visible.
    pub fn reveal_overlay(&mut self, revision: u64) -> bool {
        if revision != self.revision || self.overlay_visible {
            return false;
        }
        self.overlay_visible = true;
        true
    }

    pub fn layout_of(&self, index: usize) -> SlideLayout {
        slide_layout(index, self.active_index, self.len)
    }

    pub fn layouts(&self) -> impl Iterator<Item = SlideLayout> + '_ {
        (0..self.len.get()).map(|i| self.layout_of(i))
    }
}
