//! Block icon cache.
//!
//! # Design
//! - Entries are keyed by the lowercase block slug; lookups lowercase the raw id.
//! - A slug is marked pending before its request starts, so repeated blocks
//!   in one payload coalesce onto a single fetch.
//! - Failed fetches settle as [`IconState::Missing`] and are never retried.
//! - Handles are owned by the cache; dropping or clearing it releases them.

use crate::core::logic::block_slug;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Anything that can be dereferenced into an `<img src>` value.
pub trait IconUrl {
    /// URL usable as an image source.
    fn url(&self) -> &str;
}

impl IconUrl for String {
    fn url(&self) -> &str {
        self
    }
}

/// Resolution state of a single slug.
#[derive(Debug, PartialEq, Eq)]
pub enum IconState<H> {
    /// Request issued, no answer yet.
    Pending,
    /// Icon resolved to a local handle.
    Ready(H),
    /// Request failed; render without an icon.
    Missing,
}

/// Session-scoped icon lookup keyed by lowercase slug.
#[derive(Debug)]
pub struct IconCache<H> {
    entries: HashMap<String, IconState<H>>,
}

impl<H> Default for IconCache<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H: IconUrl> IconCache<H> {
    /// Mark the block's slug as pending and return it when a fetch should start.
    ///
    /// Returns `None` when the slug is already pending or settled.
    pub fn claim(&mut self, block: &str) -> Option<String> {
        let slug = block_slug(block);
        match self.entries.entry(slug) {
            Entry::Occupied(_) => None,
            Entry::Vacant(vacant) => {
                let slug = vacant.key().clone();
                vacant.insert(IconState::Pending);
                Some(slug)
            }
        }
    }

    /// Claim every block in order and return the distinct slugs to fetch.
    pub fn claim_all<'a, I>(&mut self, blocks: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        blocks
            .into_iter()
            .filter_map(|block| self.claim(block))
            .collect()
    }

    /// Settle a pending slug. `None` records a failed fetch.
    ///
    /// Returns `false` (dropping any handle) when the slug is not pending,
    /// e.g. after the cache was cleared on teardown.
    pub fn resolve(&mut self, slug: &str, handle: Option<H>) -> bool {
        match self.entries.get_mut(slug) {
            Some(state @ IconState::Pending) => {
                *state = handle.map_or(IconState::Missing, IconState::Ready);
                true
            }
            _ => false,
        }
    }

    /// Icon URL for a raw block id, when resolved.
    #[must_use]
    pub fn icon_url(&self, block: &str) -> Option<&str> {
        match self.entries.get(&block_slug(block)) {
            Some(IconState::Ready(handle)) => Some(handle.url()),
            _ => None,
        }
    }

    /// Current state for a raw block id.
    #[must_use]
    pub fn state(&self, block: &str) -> Option<&IconState<H>> {
        self.entries.get(&block_slug(block))
    }

    /// Number of slugs seen this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slug has been claimed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slugs still awaiting a response.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries
            .values()
            .filter(|state| matches!(state, IconState::Pending))
            .count()
    }

    /// Drop every entry, releasing resolved handles.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracked {
        url: String,
        released: Rc<Cell<usize>>,
    }

    impl IconUrl for Tracked {
        fn url(&self) -> &str {
            &self.url
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[test]
    fn repeated_blocks_claim_once() {
        let mut cache = IconCache::<String>::default();
        let slugs = cache.claim_all(["stone", "OAK_PLANKS", "Stone", "oak_planks", "dirt"]);
        assert_eq!(slugs, vec!["stone", "oak_planks", "dirt"]);
        assert_eq!(cache.pending(), 3);
        assert!(cache.claim("STONE").is_none());
    }

    #[test]
    fn lookups_lowercase_the_raw_id() {
        let mut cache = IconCache::default();
        let slug = cache.claim("OAK_PLANKS").expect("first claim");
        assert!(cache.resolve(&slug, Some("blob:oak".to_string())));
        assert_eq!(cache.icon_url("OAK_PLANKS"), Some("blob:oak"));
        assert_eq!(cache.icon_url("oak_planks"), Some("blob:oak"));
    }

    #[test]
    fn failed_icons_do_not_affect_others() {
        let mut cache = IconCache::default();
        let slugs = cache.claim_all(["stone", "dirt"]);
        assert!(cache.resolve(&slugs[1], None));
        assert!(cache.resolve(&slugs[0], Some("blob:stone".to_string())));
        assert_eq!(cache.icon_url("dirt"), None);
        assert_eq!(cache.state("dirt"), Some(&IconState::Missing));
        assert_eq!(cache.icon_url("stone"), Some("blob:stone"));
        assert!(cache.claim("dirt").is_none());
    }

    #[test]
    fn settled_slugs_ignore_late_answers() {
        let mut cache = IconCache::default();
        let slug = cache.claim("stone").expect("first claim");
        assert!(cache.resolve(&slug, Some("blob:first".to_string())));
        assert!(!cache.resolve(&slug, Some("blob:second".to_string())));
        assert_eq!(cache.icon_url("stone"), Some("blob:first"));
        assert!(!cache.resolve("never_claimed", None));
    }

    #[test]
    fn clearing_releases_handles() {
        let released = Rc::new(Cell::new(0));
        let mut cache = IconCache::default();
        let slugs = cache.claim_all(["stone", "dirt"]);
        for slug in &slugs {
            cache.resolve(
                slug,
                Some(Tracked {
                    url: format!("blob:{slug}"),
                    released: released.clone(),
                }),
            );
        }
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(released.get(), 2);
        assert!(cache.is_empty());

        let late = Tracked {
            url: "blob:late".into(),
            released: released.clone(),
        };
        assert!(!cache.resolve("stone", Some(late)));
        assert_eq!(released.get(), 3);
    }
}
