//! Visibility collaborator
//!
//! The controller never computes scroll positions itself; it asks the
//! viewport whether an item is visible and asks it to scroll otherwise.

/// Scroll container holding the rendered suggestion items
pub trait Visibility {
    /// Stable reference to one rendered item, obtained at render time
    type Handle: Clone;

    fn is_visible(&self, item: &Self::Handle) -> bool;

    /// Scroll so `item` is fully shown, flush with the top edge when
    /// `align_to_top`, otherwise flush with the bottom edge
    fn scroll_into_view(&mut self, item: &Self::Handle, align_to_top: bool);

    /// The list was replaced
    fn reset_scroll(&mut self) {}
}

/// Row of a rendered list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle(pub usize);

/// Vertically scrolled list of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListViewport {
    pub offset: usize,
    pub height: usize,
}

impl ListViewport {
    pub fn new(height: usize) -> Self {
        Self { offset: 0, height }
    }

    /// Called by the render pass; keeps the offset inside the content
    pub fn update_bounds(&mut self, content_rows: usize, height: usize) {
        self.height = height;
        let max_offset = content_rows.saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }

    /// Row index under a viewport-relative line
    pub fn row_at(&self, relative_y: usize) -> Option<usize> {
        (relative_y < self.height).then(|| self.offset + relative_y)
    }
}

impl Visibility for ListViewport {
    type Handle = RowHandle;

    fn is_visible(&self, item: &RowHandle) -> bool {
        item.0 >= self.offset && item.0 < self.offset + self.height
    }

    fn scroll_into_view(&mut self, item: &RowHandle, align_to_top: bool) {
        if align_to_top || self.height == 0 {
            self.offset = item.0;
        } else {
            self.offset = (item.0 + 1).saturating_sub(self.height);
        }
    }

    fn reset_scroll(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window() {
        let viewport = ListViewport { offset: 2, height: 3 };
        assert!(!viewport.is_visible(&RowHandle(1)));
        assert!(viewport.is_visible(&RowHandle(2)));
        assert!(viewport.is_visible(&RowHandle(4)));
        assert!(!viewport.is_visible(&RowHandle(5)));
    }

    #[test]
    fn test_scroll_aligns_to_bottom_edge() {
        let mut viewport = ListViewport::new(3);
        viewport.scroll_into_view(&RowHandle(5), false);
        assert_eq!(viewport.offset, 3);
        assert!(viewport.is_visible(&RowHandle(5)));
        assert!(!viewport.is_visible(&RowHandle(6)));
    }

    #[test]
    fn test_scroll_above_window_with_bottom_alignment() {
        let mut viewport = ListViewport { offset: 6, height: 3 };
        viewport.scroll_into_view(&RowHandle(1), false);
        assert_eq!(viewport.offset, 0);
        assert!(viewport.is_visible(&RowHandle(1)));
    }

    #[test]
    fn test_scroll_aligns_to_top_edge() {
        let mut viewport = ListViewport::new(3);
        viewport.scroll_into_view(&RowHandle(7), true);
        assert_eq!(viewport.offset, 7);
    }

    #[test]
    fn test_update_bounds_clamps_offset() {
        let mut viewport = ListViewport { offset: 10, height: 3 };
        viewport.update_bounds(5, 4);
        assert_eq!(viewport.offset, 1);
        assert_eq!(viewport.height, 4);
    }

    #[test]
    fn test_reset_scroll() {
        let mut viewport = ListViewport { offset: 4, height: 2 };
        viewport.reset_scroll();
        assert_eq!(viewport.offset, 0);
    }

    #[test]
    fn test_row_at() {
        let viewport = ListViewport { offset: 4, height: 2 };
        assert_eq!(viewport.row_at(0), Some(4));
        assert_eq!(viewport.row_at(1), Some(5));
        assert_eq!(viewport.row_at(2), None);
    }
}
