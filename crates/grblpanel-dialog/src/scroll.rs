//! Scroll panel geometry
//!
//! [`ScrollArea`] is the seam between the category navigator and whatever
//! widget toolkit renders the panel. [`StackedScrollArea`] is the model used
//! by the dialog: a column of regions scrolled vertically inside a fixed
//! viewport, all in integer pixels.

/// Extra width reserved for the vertical scrollbar
pub const SCROLLBAR_WIDTH: i32 = 16;

/// Rectangle occupied by one category, in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: i32,
    pub height: i32,
    pub width: i32,
}

impl Region {
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Whether any part of the region lies inside the viewport window `[offset, offset + viewport)`
    pub fn intersects(&self, offset: i32, viewport: i32) -> bool {
        self.bottom() > offset && self.top < offset + viewport
    }
}

/// Scrollable container the navigator drives
pub trait ScrollArea {
    /// Current vertical scroll offset
    fn offset(&self) -> i32;

    /// Visible height
    fn viewport_height(&self) -> i32;

    /// Geometry of the region registered under `identifier`
    fn region(&self, identifier: &str) -> Option<Region>;

    /// Scroll the least amount that brings `region` (plus `margin` above and
    /// below) into view. A region already fully visible is left alone;
    /// regions taller than the viewport are centred.
    fn ensure_visible(&mut self, region: Region, margin: i32);

    /// Recompute the minimum width once child widgets are laid out
    fn update_minimum_width(&mut self);
}

/// Vertically stacked regions inside a fixed-height viewport
#[derive(Debug, Clone, PartialEq)]
pub struct StackedScrollArea {
    regions: Vec<(String, Region)>,
    offset: i32,
    viewport_height: i32,
    minimum_width: Option<i32>,
}

impl StackedScrollArea {
    pub fn new(regions: Vec<(String, Region)>, viewport_height: i32) -> Self {
        Self {
            regions,
            offset: 0,
            viewport_height: viewport_height.max(1),
            minimum_width: None,
        }
    }

    /// Total height of the scrolled content
    pub fn content_height(&self) -> i32 {
        self.regions
            .iter()
            .map(|(_, region)| region.bottom())
            .max()
            .unwrap_or(0)
    }

    /// Largest valid offset
    pub fn max_offset(&self) -> i32 {
        (self.content_height() - self.viewport_height).max(0)
    }

    /// Minimum width, known only after [`ScrollArea::update_minimum_width`]
    pub fn minimum_width(&self) -> Option<i32> {
        self.minimum_width
    }

    /// Move to `offset`, clamped to the scroll range. Returns whether the offset changed.
    pub fn set_offset(&mut self, offset: i32) -> bool {
        let clamped = offset.clamp(0, self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Resize the viewport. Returns whether the offset had to move.
    pub fn set_viewport_height(&mut self, height: i32) -> bool {
        self.viewport_height = height.max(1);
        self.set_offset(self.offset)
    }

    /// Replace the region geometry, keeping the offset within range. Returns whether the offset moved.
    pub fn set_regions(&mut self, regions: Vec<(String, Region)>) -> bool {
        self.regions = regions;
        self.set_offset(self.offset)
    }
}

impl ScrollArea for StackedScrollArea {
    fn offset(&self) -> i32 {
        self.offset
    }

    fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    fn region(&self, identifier: &str) -> Option<Region> {
        self.regions
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, region)| *region)
    }

    fn ensure_visible(&mut self, region: Region, margin: i32) {
        if region.top >= self.offset && region.bottom() <= self.offset + self.viewport_height {
            return;
        }

        let top = region.top - margin;
        let bottom = region.bottom() + margin;

        let target = if bottom - top > self.viewport_height {
            (top + bottom) / 2 - self.viewport_height / 2
        } else if bottom > self.offset + self.viewport_height {
            bottom - self.viewport_height
        } else if top < self.offset {
            top
        } else {
            return;
        };

        self.set_offset(target);
    }

    fn update_minimum_width(&mut self) {
        let widest = self
            .regions
            .iter()
            .map(|(_, region)| region.width)
            .max()
            .unwrap_or(0);
        self.minimum_width = Some(widest + SCROLLBAR_WIDTH);
    }
}
