//! Demo host: five labeled pages, random navigation, container recycling.
//!
//! Wires a [`PagingEngine`] to a simulated paging-snap viewport, starts on
//! page 3, then performs a handful of random animated jumps, keeping a
//! container pool in sync with the visible set and logging every confirmed
//! page change through the delegate.

use std::rc::Rc;

use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pageflip::{
    ContainerPool, PagingDelegate, PagingEngine, PagingError, ScrollSignal, ViewportAdapter,
    px::{Px, PxSize},
    sim::{SimViewport, VecSource},
};

const PAGE_COUNT: usize = 5;
const RANDOM_JUMPS: usize = 8;

struct LoggingDelegate;

impl PagingDelegate for LoggingDelegate {
    fn current_page_changed(&self, previous: usize, current: usize) {
        info!(previous, current, "current page changed");
    }
}

fn main() -> Result<(), PagingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let source = Rc::new(VecSource::new(
        (0..PAGE_COUNT).map(|index| format!("page {index}")).collect(),
    ));
    let delegate = Rc::new(LoggingDelegate);

    let mut engine = PagingEngine::new(0);
    engine.bind_source(&source);
    engine.bind_delegate(&delegate);

    let mut viewport = SimViewport::new(PxSize::new(Px(320), Px(480)));
    let mut pool = ContainerPool::new();

    engine.activate(&mut viewport);
    engine.set_current_page_index(&mut viewport, 3)?;
    sync_containers(&mut pool, &engine, &viewport)?;
    info!(
        current = engine.current_page_index(),
        attached = ?pool.attached_indices(),
        "activated"
    );

    let mut rng = rand::rng();
    for _ in 0..RANDOM_JUMPS {
        let target = loop {
            let candidate = rng.random_range(0..PAGE_COUNT);
            if candidate != engine.current_page_index() {
                break candidate;
            }
        };

        engine.scroll_to_page(&mut viewport, target, true)?;
        // The simulated surface finishes its animation immediately and
        // reports completion, as a platform surface eventually would.
        viewport.complete_animation();
        engine.handle_signal(&viewport, ScrollSignal::ScrollAnimationEnd);
        sync_containers(&mut pool, &engine, &viewport)?;

        info!(
            current = engine.current_page_index(),
            previous = engine.previous_page_index(),
            attached = ?pool.attached_indices(),
            recycled = pool.recycled_len(),
            "jumped"
        );
    }

    Ok(())
}

/// Keeps the container pool aligned with the viewport's visible set:
/// detach what scrolled off, then attach content for what scrolled on.
fn sync_containers(
    pool: &mut ContainerPool<String>,
    engine: &PagingEngine<String>,
    viewport: &SimViewport,
) -> Result<(), PagingError> {
    let visible = viewport.visible_indices();
    for index in pool.attached_indices() {
        if !visible.contains(&index) {
            pool.detach(index);
        }
    }
    for &index in visible.iter() {
        if pool.container_for(index).is_none() {
            let content = engine.content_for_page(index)?;
            pool.attach(index, content)?;
        }
    }
    Ok(())
}
