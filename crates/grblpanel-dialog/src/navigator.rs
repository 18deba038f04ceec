//! Category list synchronised with the scroll panel
//!
//! Selecting a category scrolls its group into view; scrolling selects the
//! category whose group starts exactly at the top of the viewport. Scroll
//! events are ignored until the dialog has been shown once.

use crate::error::{DialogError, DialogResult};
use crate::layout::Category;
use crate::scroll::ScrollArea;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNavigator {
    categories: Vec<Category>,
    selected: usize,
    armed: bool,
}

impl CategoryNavigator {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            selected: 0,
            armed: false,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.categories.get(self.selected)
    }

    /// Whether scroll events are being followed
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Select a category from the list and bring its group into view.
    ///
    /// If the scroll offset moves, the selection is re-evaluated from the new
    /// offset. Returns the index selected afterwards.
    pub fn select<A: ScrollArea + ?Sized>(
        &mut self,
        index: usize,
        area: &mut A,
        margin: i32,
    ) -> DialogResult<usize> {
        let category = self
            .categories
            .get(index)
            .ok_or(DialogError::UnknownCategory {
                index,
                count: self.categories.len(),
            })?;

        self.selected = index;
        let before = area.offset();
        if let Some(region) = area.region(&category.identifier) {
            area.ensure_visible(region, margin);
        } else {
            tracing::warn!("No region registered for category '{}'", category.identifier);
        }

        if area.offset() != before {
            tracing::debug!("Scrolled from {} to {}", before, area.offset());
            self.on_scroll(area);
        }
        Ok(self.selected)
    }

    /// Follow a change of the scroll offset. Returns whether the selection changed.
    pub fn on_scroll<A: ScrollArea + ?Sized>(&mut self, area: &A) -> bool {
        if !self.armed {
            return false;
        }

        let offset = area.offset();
        let viewport = area.viewport_height();
        let aligned = self.categories.iter().position(|category| {
            area.region(&category.identifier)
                .is_some_and(|region| region.intersects(offset, viewport) && region.top == offset)
        });

        match aligned {
            Some(index) if index != self.selected => {
                tracing::debug!("Offset {} selects category {}", offset, index);
                self.selected = index;
                true
            }
            _ => false,
        }
    }

    /// Arm scroll following on the first show. Returns false if already armed.
    pub fn on_first_show<A: ScrollArea + ?Sized>(&mut self, area: &mut A) -> bool {
        if self.armed {
            return false;
        }
        area.update_minimum_width();
        self.armed = true;
        true
    }
}
