//! Tag-based invalidation for data the client keeps around.
//!
//! Mutations bump a tag's generation. A cached read is only served while the
//! generation it was stored under is still current.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    Users,
}

impl CacheTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheTag::Users => "users",
        }
    }
}

#[derive(Clone, Default)]
pub struct CacheTags {
    generations: Rc<RefCell<HashMap<CacheTag, u64>>>,
}

impl CacheTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self, tag: CacheTag) -> u64 {
        self.generations.borrow().get(&tag).copied().unwrap_or(0)
    }

    pub fn invalidate(&self, tag: CacheTag) -> u64 {
        let generation = {
            let mut generations = self.generations.borrow_mut();
            let generation = generations.entry(tag).or_insert(0);
            *generation += 1;
            *generation
        };
        log::debug!("invalidated cache tag {} -> {}", tag.as_str(), generation);
        generation
    }
}

/// One cached value read under `tag`.
#[derive(Clone)]
pub struct TaggedEntry<T> {
    tag: CacheTag,
    slot: Rc<RefCell<Option<(u64, T)>>>,
}

impl<T: Clone> TaggedEntry<T> {
    pub fn new(tag: CacheTag) -> Self {
        Self {
            tag,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// The stored value, unless `tags` moved past it.
    pub fn get(&self, tags: &CacheTags) -> Option<T> {
        let current = tags.generation(self.tag);
        self.slot
            .borrow()
            .as_ref()
            .filter(|(generation, _)| *generation == current)
            .map(|(_, value)| value.clone())
    }

    pub fn put(&self, tags: &CacheTags, value: T) {
        *self.slot.borrow_mut() = Some((tags.generation(self.tag), value));
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
