//! Scroll/gesture state tracking and settle detection.
//!
//! [`PagingEngine`] owns the authoritative notion of "current page". It is
//! fed raw gesture signals by the host, drives the viewport's scrolls, and
//! recomputes the current index whenever motion stops. Both user-driven
//! swipes and programmatic jumps converge on the same settle computation,
//! so there is exactly one write path for the current index.
//!
//! # Settle detection
//!
//! The paging-snap surface always comes to rest exactly on a page
//! boundary, so the settled page is the one whose rendered frame contains
//! the viewport's geometric center. That test is exact integer geometry,
//! immune to the rounding and fling-speed edge cases of offset-division or
//! velocity heuristics.

use std::rc::{Rc, Weak};

use tracing::{trace, warn};

use crate::{
    error::PagingError,
    source::{PageSource, PagingDelegate},
    viewport::{ScrollSignal, ViewportAdapter},
};

/// Core paging engine: gesture state machine plus settle detection.
///
/// The engine holds non-owning handles to the host's [`PageSource`] and
/// [`PagingDelegate`]; either may go away at any time, in which case the
/// engine reads as empty / stops notifying rather than failing. The
/// viewport is owned by the host and passed into each operation that
/// observes or drives it.
pub struct PagingEngine<C: 'static> {
    source: Option<Weak<dyn PageSource<Content = C>>>,
    delegate: Option<Weak<dyn PagingDelegate>>,
    /// Index of the page currently centered and motion-settled. Only
    /// `did_stop_scrolling` writes this; every external write funnels
    /// through the scroll-then-settle path.
    current_page: usize,
    previous_page: usize,
    is_scrolling: bool,
}

impl<C> PagingEngine<C> {
    /// Creates an engine whose current page starts at `initial_page`.
    ///
    /// The initial page takes visible effect on [`PagingEngine::activate`],
    /// once the viewport has a nonzero layout.
    pub fn new(initial_page: usize) -> Self {
        Self {
            source: None,
            delegate: None,
            current_page: initial_page,
            previous_page: initial_page,
            is_scrolling: false,
        }
    }

    /// Binds the page source capability through a non-owning handle.
    pub fn bind_source<S>(&mut self, source: &Rc<S>)
    where
        S: PageSource<Content = C> + 'static,
    {
        // Coerce to the trait object before downgrading; the weak handle
        // points at the same allocation the host keeps.
        let source: Rc<dyn PageSource<Content = C>> = Rc::<S>::clone(source);
        self.source = Some(Rc::downgrade(&source));
    }

    /// Binds the change-notification delegate through a non-owning handle.
    pub fn bind_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: PagingDelegate + 'static,
    {
        let delegate: Rc<dyn PagingDelegate> = Rc::<D>::clone(delegate);
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    /// Number of pages the bound source currently reports.
    ///
    /// An unbound or dropped source reads as zero pages.
    pub fn page_count(&self) -> usize {
        self.upgraded_source()
            .map(|source| source.page_count())
            .unwrap_or(0)
    }

    /// Content for the page at `index`, fetched fresh from the source.
    ///
    /// Hosts call this when a container is about to become visible.
    pub fn content_for_page(&self, index: usize) -> Result<C, PagingError> {
        match self.upgraded_source() {
            Some(source) => source.content_for_page(index),
            None => Err(PagingError::IndexOutOfRange { index, count: 0 }),
        }
    }

    /// The index of the page currently settled in view.
    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    /// The value of the current index immediately before its last
    /// confirmed change.
    pub fn previous_page_index(&self) -> usize {
        self.previous_page
    }

    /// Whether a drag or scroll animation is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Pushes the source's page count into the viewport, re-deriving its
    /// rendered set.
    ///
    /// Scroll position is not preserved; callers needing a stable page
    /// afterwards should follow up with [`PagingEngine::scroll_to_page`].
    pub fn reload_data(&self, viewport: &mut dyn ViewportAdapter) {
        viewport.reload(self.page_count());
    }

    /// Reloads and restores the stored current page, non-animated.
    ///
    /// This is where a start index chosen before layout first takes
    /// effect. The stored index is clamped if the source shrank since it
    /// was set.
    pub fn activate(&mut self, viewport: &mut dyn ViewportAdapter) {
        self.reload_data(viewport);
        let count = viewport.item_count();
        if count == 0 {
            return;
        }
        let index = self.current_page.min(count - 1);
        if let Err(error) = self.scroll_to_page(viewport, index, false) {
            warn!(%error, "activate could not restore the current page");
        }
    }

    /// Non-animated jump to `index`.
    ///
    /// A no-op while the viewport is unrealized (empty frame); otherwise
    /// identical to `scroll_to_page(index, animated = false)`.
    pub fn set_current_page_index(
        &mut self,
        viewport: &mut dyn ViewportAdapter,
        index: usize,
    ) -> Result<(), PagingError> {
        if viewport.viewport_frame().is_empty() {
            return Ok(());
        }
        self.scroll_to_page(viewport, index, false)
    }

    /// Scrolls so the page at `index` is centered horizontally.
    ///
    /// Fails with [`PagingError::IndexOutOfRange`] unless the viewport has
    /// items and `index` is in range. Non-animated scrolls settle
    /// synchronously before returning; animated scrolls settle later, when
    /// the surface's own [`ScrollSignal::ScrollAnimationEnd`] arrives.
    pub fn scroll_to_page(
        &mut self,
        viewport: &mut dyn ViewportAdapter,
        index: usize,
        animated: bool,
    ) -> Result<(), PagingError> {
        let count = viewport.item_count();
        if count == 0 || index >= count {
            return Err(PagingError::IndexOutOfRange { index, count });
        }
        viewport.request_scroll(index, animated);
        if !animated {
            self.did_stop_scrolling(viewport);
        }
        Ok(())
    }

    /// Feeds one raw gesture/animation lifecycle signal into the state
    /// machine.
    ///
    /// A drag that interrupts a running scroll animation simply re-enters
    /// the scrolling state; if the abandoned animation still emits a late
    /// [`ScrollSignal::ScrollAnimationEnd`], the settle recomputation is
    /// idempotent and fires nothing new.
    pub fn handle_signal(&mut self, viewport: &dyn ViewportAdapter, signal: ScrollSignal) {
        trace!(?signal, "scroll signal");
        match signal {
            ScrollSignal::DragBegin => self.did_start_scrolling(),
            ScrollSignal::DragEnd {
                will_decelerate: true,
            } => {}
            ScrollSignal::DragEnd {
                will_decelerate: false,
            }
            | ScrollSignal::DecelerationEnd
            | ScrollSignal::ScrollAnimationEnd
            | ScrollSignal::ScrollToTop => self.did_stop_scrolling(viewport),
        }
    }

    fn did_start_scrolling(&mut self) {
        self.is_scrolling = true;
    }

    /// Runs on every motion-ended signal. Recomputes the settled page and
    /// fires the change notification when it moved.
    fn did_stop_scrolling(&mut self, viewport: &dyn ViewportAdapter) {
        self.is_scrolling = false;
        if viewport.item_count() == 0 {
            return;
        }
        if viewport.viewport_frame().is_empty() {
            return;
        }

        self.validate_visible_frames(viewport);
        let new_index = self.compute_current_page(viewport);
        if new_index == self.current_page {
            return;
        }
        self.previous_page = self.current_page;
        self.current_page = new_index;
        trace!(
            previous = self.previous_page,
            current = self.current_page,
            "current page changed"
        );
        if let Some(delegate) = self.upgraded_delegate() {
            delegate.current_page_changed(self.previous_page, self.current_page);
        }
    }

    /// Finds the rendered page whose frame contains the viewport center.
    ///
    /// Only valid once motion has fully stopped and the viewport is laid
    /// out; paging snap then guarantees exactly one covering frame. The
    /// empty result is a degraded path, logged and recovered as page 0.
    fn compute_current_page(&self, viewport: &dyn ViewportAdapter) -> usize {
        let center = viewport.center_in_content_space();
        for index in viewport.visible_indices() {
            if let Some(frame) = viewport.rendered_item_frame(index)
                && frame.contains(center)
            {
                return index;
            }
        }
        warn!(
            center_x = center.x.raw(),
            center_y = center.y.raw(),
            "no rendered page covers the viewport center, defaulting to page 0"
        );
        0
    }

    /// Diagnostic pass: every visible page frame should sit at
    /// `viewport_width * index` with the viewport's width. Mismatches are
    /// layout races; they are logged and never block settle computation.
    fn validate_visible_frames(&self, viewport: &dyn ViewportAdapter) {
        let width = viewport.viewport_frame().width();
        for index in viewport.visible_indices() {
            let Some(frame) = viewport.rendered_item_frame(index) else {
                continue;
            };
            let expected_x = width.saturating_mul_index(index);
            if frame.x() != expected_x || frame.width() != width {
                warn!(
                    index,
                    expected_x = expected_x.raw(),
                    x = frame.x().raw(),
                    width = frame.width().raw(),
                    "rendered page frame out of place"
                );
            }
        }
    }

    fn upgraded_source(&self) -> Option<Rc<dyn PageSource<Content = C>>> {
        self.source.as_ref().and_then(Weak::upgrade)
    }

    fn upgraded_delegate(&self) -> Option<Rc<dyn PagingDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

impl<C> Default for PagingEngine<C> {
    fn default() -> Self {
        Self::new(0)
    }
}
