//! Recyclable on-screen containers for visible pages.
//!
//! The host keeps a [`ContainerPool`] and drives it from the viewport's
//! visibility callbacks: attach content when a page scrolls on screen,
//! detach when it scrolls off. A detached container goes back to the pool
//! and is reused for whatever index becomes visible next, so the pool never
//! grows past the number of simultaneously visible pages.

use tracing::trace;

use crate::error::PagingError;

/// Stable identity of one recyclable container instance.
///
/// Identity survives recycling: the same id reappearing under a new index
/// means the instance was reused, which tests rely on to prove recycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

/// One recyclable surface holding at most one page's content.
#[derive(Debug)]
struct PageContainer<C> {
    id: ContainerId,
    occupant: Option<(usize, C)>,
}

/// Pool of recyclable page containers.
///
/// Attach and detach are strictly paired per container instance: a
/// container must be fully released before it can carry another page's
/// content. Violations are reported, never silently overwritten, because an
/// overwritten occupant would surface stale content under the wrong index.
#[derive(Debug, Default)]
pub struct ContainerPool<C> {
    active: Vec<PageContainer<C>>,
    recycled: Vec<PageContainer<C>>,
    next_id: usize,
}

impl<C> ContainerPool<C> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            recycled: Vec::new(),
            next_id: 0,
        }
    }

    /// Attaches content for `index` to a recycled (or freshly allocated)
    /// container and returns the container's identity.
    ///
    /// Fails with [`PagingError::AlreadyAttached`] when `index` already
    /// has an attached container.
    pub fn attach(&mut self, index: usize, content: C) -> Result<ContainerId, PagingError> {
        if self.active.iter().any(|c| occupant_index(c) == Some(index)) {
            return Err(PagingError::AlreadyAttached { index });
        }

        // Recycled containers were fully released by detach.
        let mut container = match self.recycled.pop() {
            Some(container) => container,
            None => {
                let id = ContainerId(self.next_id);
                self.next_id += 1;
                PageContainer { id, occupant: None }
            }
        };

        trace!(index, id = container.id.0, "attach page content");
        container.occupant = Some((index, content));
        let id = container.id;
        self.active.push(container);
        Ok(id)
    }

    /// Detaches the container showing `index`, returning its content to the
    /// caller and the container to the recycle list.
    ///
    /// Returns `None` when no container holds `index`.
    pub fn detach(&mut self, index: usize) -> Option<C> {
        let position = self
            .active
            .iter()
            .position(|c| occupant_index(c) == Some(index))?;
        let mut container = self.active.swap_remove(position);
        trace!(index, id = container.id.0, "detach page content");
        let content = container.occupant.take().map(|(_, content)| content);
        self.recycled.push(container);
        content
    }

    /// The container identity currently showing `index`, if any.
    pub fn container_for(&self, index: usize) -> Option<ContainerId> {
        self.active
            .iter()
            .find(|c| occupant_index(c) == Some(index))
            .map(|c| c.id)
    }

    /// Content currently attached for `index`, if any.
    pub fn content_for(&self, index: usize) -> Option<&C> {
        self.active
            .iter()
            .find(|c| occupant_index(c) == Some(index))
            .and_then(|c| c.occupant.as_ref().map(|(_, content)| content))
    }

    /// Indices with attached containers, in no particular order.
    pub fn attached_indices(&self) -> Vec<usize> {
        self.active.iter().filter_map(occupant_index).collect()
    }

    /// Number of containers currently showing content.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of detached containers waiting for reuse.
    pub fn recycled_len(&self) -> usize {
        self.recycled.len()
    }
}

fn occupant_index<C>(container: &PageContainer<C>) -> Option<usize> {
    container.occupant.as_ref().map(|(index, _)| *index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_then_detach_returns_content() {
        let mut pool = ContainerPool::new();
        pool.attach(0, "zero").unwrap();
        pool.attach(1, "one").unwrap();

        assert_eq!(pool.content_for(1), Some(&"one"));
        assert_eq!(pool.detach(0), Some("zero"));
        assert_eq!(pool.active_len(), 1);
        assert_eq!(pool.recycled_len(), 1);
    }

    #[test]
    fn detached_container_is_reused() {
        let mut pool = ContainerPool::new();
        let id0 = pool.attach(0, "zero").unwrap();
        pool.attach(1, "one").unwrap();

        pool.detach(0).unwrap();
        let id2 = pool.attach(2, "two").unwrap();

        assert_eq!(id0, id2);
        assert_eq!(pool.content_for(2), Some(&"two"));
        assert_eq!(pool.recycled_len(), 0);
    }

    #[test]
    fn double_attach_for_same_index_is_rejected() {
        let mut pool = ContainerPool::new();
        pool.attach(3, "three").unwrap();

        let err = pool.attach(3, "again").unwrap_err();
        assert_eq!(err, PagingError::AlreadyAttached { index: 3 });
        assert_eq!(pool.active_len(), 1);
        assert_eq!(pool.content_for(3), Some(&"three"));
    }

    #[test]
    fn detach_of_absent_index_is_none() {
        let mut pool: ContainerPool<&str> = ContainerPool::new();
        assert_eq!(pool.detach(7), None);
    }

    #[test]
    fn pool_does_not_grow_past_peak_visibility() {
        let mut pool = ContainerPool::new();
        // Two pages visible at a time while scrolling through five.
        pool.attach(0, 0).unwrap();
        pool.attach(1, 1).unwrap();
        for index in 2..5 {
            pool.detach(index - 2).unwrap();
            pool.attach(index, index).unwrap();
        }

        assert_eq!(pool.active_len() + pool.recycled_len(), 2);
        assert_eq!(pool.attached_indices().len(), 2);
    }
}
