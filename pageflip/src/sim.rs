//! In-memory stand-ins for the host side of the engine's seams.
//!
//! [`SimViewport`] models a paging-snap scroll surface with exact geometry:
//! page `i` renders at `x = width * i`, the rendered window is the set of
//! pages intersecting the visible band, and scrolls land precisely on page
//! boundaries. Unit tests and the example binary drive the engine against
//! it instead of a real compositor.

use std::cell::RefCell;

use smallvec::SmallVec;

use crate::{
    error::PagingError,
    px::{Px, PxPosition, PxRect, PxSize},
    source::{PageSource, PagingDelegate},
    viewport::ViewportAdapter,
};

/// Simulated paging-snap scroll surface.
#[derive(Debug)]
pub struct SimViewport {
    frame: PxRect,
    item_count: usize,
    offset: Px,
    pending_target: Option<usize>,
    skewed_frame: Option<(usize, Px)>,
    rendering_suspended: bool,
}

impl SimViewport {
    /// Creates a laid-out viewport of the given size at content offset 0.
    pub fn new(size: PxSize) -> Self {
        Self {
            frame: PxRect {
                origin: PxPosition::ZERO,
                size,
            },
            item_count: 0,
            offset: Px::ZERO,
            pending_target: None,
            skewed_frame: None,
            rendering_suspended: false,
        }
    }

    /// Creates a viewport that has not been laid out yet (empty frame).
    pub fn unrealized() -> Self {
        Self::new(PxSize::ZERO)
    }

    /// Current content offset along the scroll axis.
    pub fn offset(&self) -> Px {
        self.offset
    }

    /// Moves the content offset directly, as a drag in progress would.
    pub fn set_offset(&mut self, offset: Px) {
        self.offset = offset;
    }

    /// Finishes a pending animated scroll by jumping to its target.
    ///
    /// Returns whether an animation was in flight. The caller is expected
    /// to follow up with a `ScrollAnimationEnd` signal, as a platform
    /// surface would.
    pub fn complete_animation(&mut self) -> bool {
        match self.pending_target.take() {
            Some(index) => {
                self.offset = self.page_width().saturating_mul_index(index);
                true
            }
            None => false,
        }
    }

    /// Abandons a pending animated scroll without moving, as an
    /// interrupting touch does.
    pub fn cancel_animation(&mut self) -> bool {
        self.pending_target.take().is_some()
    }

    /// Shifts the reported frame of one rendered page, simulating the
    /// layout race the engine's diagnostic pass watches for.
    pub fn skew_frame(&mut self, index: usize, dx: Px) {
        self.skewed_frame = Some((index, dx));
    }

    /// When suspended, no item reports a rendered frame even though
    /// visibility is unchanged. Exercises the degraded center-lookup path.
    pub fn suspend_rendering(&mut self, suspended: bool) {
        self.rendering_suspended = suspended;
    }

    fn page_width(&self) -> Px {
        self.frame.width()
    }

    fn visible_band(&self) -> PxRect {
        PxRect {
            origin: PxPosition::new(self.offset, Px::ZERO),
            size: self.frame.size,
        }
    }

    fn item_frame(&self, index: usize) -> PxRect {
        let mut x = self.page_width().saturating_mul_index(index);
        if let Some((skewed, dx)) = self.skewed_frame
            && skewed == index
        {
            x += dx;
        }
        PxRect {
            origin: PxPosition::new(x, Px::ZERO),
            size: self.frame.size,
        }
    }

    fn max_offset(&self) -> Px {
        if self.item_count == 0 {
            Px::ZERO
        } else {
            self.page_width().saturating_mul_index(self.item_count - 1)
        }
    }
}

impl ViewportAdapter for SimViewport {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn viewport_frame(&self) -> PxRect {
        self.frame
    }

    fn rendered_item_frame(&self, index: usize) -> Option<PxRect> {
        if self.rendering_suspended || index >= self.item_count {
            return None;
        }
        let frame = self.item_frame(index);
        frame.intersects(self.visible_band()).then_some(frame)
    }

    fn visible_indices(&self) -> SmallVec<[usize; 8]> {
        (0..self.item_count)
            .filter(|&index| self.item_frame(index).intersects(self.visible_band()))
            .collect()
    }

    fn center_in_content_space(&self) -> PxPosition {
        PxPosition::new(
            self.offset.saturating_add(self.frame.width() / 2),
            self.frame.height() / 2,
        )
    }

    fn request_scroll(&mut self, index: usize, animated: bool) {
        if animated {
            self.pending_target = Some(index);
        } else {
            self.pending_target = None;
            self.offset = self.page_width().saturating_mul_index(index);
        }
    }

    fn reload(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.pending_target = None;
        self.offset = self.offset.min(self.max_offset()).max(Px::ZERO);
    }
}

/// Page source backed by a `Vec` of cloneable content.
#[derive(Debug)]
pub struct VecSource<C: Clone> {
    pages: Vec<C>,
}

impl<C: Clone> VecSource<C> {
    /// Creates a source over the given pages.
    pub fn new(pages: Vec<C>) -> Self {
        Self { pages }
    }
}

impl<C: Clone> PageSource for VecSource<C> {
    type Content = C;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn content_for_page(&self, index: usize) -> Result<C, PagingError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(PagingError::IndexOutOfRange {
                index,
                count: self.pages.len(),
            })
    }
}

/// Delegate that records every `(previous, current)` notification.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    changes: RefCell<Vec<(usize, usize)>>,
}

impl RecordingDelegate {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first.
    pub fn changes(&self) -> Vec<(usize, usize)> {
        self.changes.borrow().clone()
    }

    /// Number of notifications received.
    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }
}

impl PagingDelegate for RecordingDelegate {
    fn current_page_changed(&self, previous: usize, current: usize) {
        self.changes.borrow_mut().push((previous, current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: PxSize = PxSize::new(Px(320), Px(480));

    #[test]
    fn visible_band_follows_offset() {
        let mut viewport = SimViewport::new(SIZE);
        viewport.reload(5);

        assert_eq!(viewport.visible_indices().as_slice(), &[0]);

        viewport.set_offset(Px(160));
        assert_eq!(viewport.visible_indices().as_slice(), &[0, 1]);

        viewport.request_scroll(4, false);
        assert_eq!(viewport.visible_indices().as_slice(), &[4]);
    }

    #[test]
    fn animated_scroll_is_deferred() {
        let mut viewport = SimViewport::new(SIZE);
        viewport.reload(3);

        viewport.request_scroll(2, true);
        assert_eq!(viewport.offset(), Px::ZERO);

        assert!(viewport.complete_animation());
        assert_eq!(viewport.offset(), Px(640));
        assert!(!viewport.complete_animation());
    }

    #[test]
    fn reload_clamps_offset_to_content() {
        let mut viewport = SimViewport::new(SIZE);
        viewport.reload(5);
        viewport.request_scroll(4, false);

        viewport.reload(2);
        assert_eq!(viewport.offset(), Px(320));
    }

    #[test]
    fn center_sits_in_settled_page() {
        let mut viewport = SimViewport::new(SIZE);
        viewport.reload(4);
        viewport.request_scroll(3, false);

        let center = viewport.center_in_content_space();
        assert!(viewport.rendered_item_frame(3).unwrap().contains(center));
    }
}
