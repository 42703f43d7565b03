//! The seam between the engine and the platform's scroll surface.
//!
//! A [`ViewportAdapter`] is the host-owned, virtualized horizontal scroll
//! surface: it renders one container per visible page, snaps scrolls to
//! page boundaries, and reports frame geometry in content space. The engine
//! drives it through this trait and never owns it.

use smallvec::SmallVec;

use crate::px::{PxPosition, PxRect};

/// Raw gesture/animation lifecycle signals emitted by the scroll surface.
///
/// The host forwards these to [`PagingEngine::handle_signal`] in the order
/// the platform delivers them.
///
/// [`PagingEngine::handle_signal`]: crate::engine::PagingEngine::handle_signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSignal {
    /// The user started dragging.
    DragBegin,
    /// The user lifted their finger. When `will_decelerate` is true the
    /// surface keeps moving and a [`ScrollSignal::DecelerationEnd`] follows;
    /// otherwise the surface is already at rest.
    DragEnd {
        /// Whether a deceleration phase follows.
        will_decelerate: bool,
    },
    /// A fling's deceleration finished.
    DecelerationEnd,
    /// A programmatic animated scroll finished.
    ScrollAnimationEnd,
    /// The surface jumped to its start. Treated exactly like
    /// [`ScrollSignal::DecelerationEnd`].
    ScrollToTop,
}

/// Host-implemented scroll surface the engine observes and drives.
///
/// Frames are in the scrollable content's coordinate space. The surface is
/// expected to run in paging-snap mode: at rest, the viewport is aligned
/// exactly to one page boundary, each page is exactly viewport-sized, and
/// page `i` sits at `x = viewport_width * i`.
pub trait ViewportAdapter {
    /// Number of items the surface currently renders from.
    fn item_count(&self) -> usize;

    /// The viewport's own frame. An empty frame means the surface has not
    /// been laid out yet.
    fn viewport_frame(&self) -> PxRect;

    /// Frame of the rendered container for `index`, or `None` when the
    /// item is outside the rendered window.
    fn rendered_item_frame(&self, index: usize) -> Option<PxRect>;

    /// Indices with a rendered container on screen right now.
    fn visible_indices(&self) -> SmallVec<[usize; 8]>;

    /// The viewport's geometric center, converted into content space.
    fn center_in_content_space(&self) -> PxPosition;

    /// Scrolls so the page at `index` is centered horizontally.
    ///
    /// Non-animated scrolls take effect before this returns. Animated
    /// scrolls start an animation whose completion the host reports via
    /// [`ScrollSignal::ScrollAnimationEnd`].
    fn request_scroll(&mut self, index: usize, animated: bool);

    /// Re-derives the rendered set for a new item count, recycling
    /// containers as needed. Scroll position is not preserved.
    fn reload(&mut self, item_count: usize);
}
