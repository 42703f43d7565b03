//! Core engine for a horizontally swipeable paging view.
//!
//! One page is shown at a time from an ordered sequence; the user swipes
//! between pages and the engine reports which page is settled in view once
//! motion stops. The crate contains only the paging logic — the platform's
//! scroll surface, rendering, and layout plumbing stay behind the
//! [`ViewportAdapter`] seam, which the host implements.
//!
//! Current-page detection is geometric: the paging-snap surface always
//! comes to rest on a page boundary, so the settled page is whichever
//! rendered container's frame contains the viewport's center point.
//!
//! # Example
//!
//! Driving the engine against the simulated viewport (enable the `testing`
//! feature for [`sim`]):
//!
//! ```
//! use std::rc::Rc;
//!
//! use pageflip::{
//!     PagingEngine,
//!     px::{Px, PxSize},
//!     sim::{RecordingDelegate, SimViewport, VecSource},
//! };
//!
//! let source = Rc::new(VecSource::new(vec!["a", "b", "c"]));
//! let delegate = Rc::new(RecordingDelegate::new());
//!
//! let mut engine = PagingEngine::new(0);
//! engine.bind_source(&source);
//! engine.bind_delegate(&delegate);
//!
//! let mut viewport = SimViewport::new(PxSize::new(Px(320), Px(480)));
//! engine.activate(&mut viewport);
//!
//! engine.scroll_to_page(&mut viewport, 2, false)?;
//! assert_eq!(engine.current_page_index(), 2);
//! assert_eq!(delegate.changes(), vec![(0, 2)]);
//! # Ok::<(), pageflip::PagingError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod container;
pub mod engine;
pub mod error;
pub mod px;
#[cfg(any(test, feature = "testing"))]
pub mod sim;
pub mod source;
pub mod viewport;

pub use container::{ContainerId, ContainerPool};
pub use engine::PagingEngine;
pub use error::PagingError;
pub use source::{PageSource, PagingDelegate};
pub use viewport::{ScrollSignal, ViewportAdapter};
