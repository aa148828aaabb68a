//! Cursor over a trail
//!
//! Position is either a valid index or past the end:
//! ```text
//! rewind ──► 0 ──next──► 1 ──next──► … ──next──► past end
//! ```
//! The cursor borrows the trail, so the trail cannot be pushed to or popped
//! from while a cursor is alive.

use crate::item::Item;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    items: &'a [Item],
    /// `items.len()` means past the end
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(items: &'a [Item]) -> Self {
        Self { items, position: 0 }
    }

    /// Move to the first item and return it
    pub fn rewind(&mut self) -> Option<&'a Item> {
        self.position = 0;
        self.current()
    }

    pub fn valid(&self) -> bool {
        self.position < self.items.len()
    }

    /// Index of the current item, `None` past the end
    pub fn key(&self) -> Option<usize> {
        self.valid().then_some(self.position)
    }

    pub fn current(&self) -> Option<&'a Item> {
        self.items.get(self.position)
    }

    /// Advance and return the new current item
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a Item> {
        if self.position < self.items.len() {
            self.position += 1;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Item, Trail};

    #[test]
    fn test_walk_visits_every_item_once() {
        let trail: Trail = ["/a", "/b", "/c"].into_iter().map(Item::new).collect();
        let mut cursor = trail.cursor();
        let mut seen = Vec::new();

        cursor.rewind();
        while cursor.valid() {
            seen.push((cursor.key().unwrap(), cursor.current().unwrap().url()));
            cursor.next();
        }

        assert_eq!(seen, [(0, "/a"), (1, "/b"), (2, "/c")]);
        assert!(!cursor.valid());
        assert_eq!(cursor.key(), None);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn test_fresh_cursor_starts_at_first_item() {
        let trail: Trail = ["/a", "/b"].into_iter().map(Item::new).collect();
        let cursor = trail.cursor();
        assert_eq!(cursor.key(), Some(0));
        assert_eq!(cursor.current().unwrap().url(), "/a");
    }

    #[test]
    fn test_next_returns_new_current() {
        let trail: Trail = ["/a", "/b"].into_iter().map(Item::new).collect();
        let mut cursor = trail.cursor();

        assert_eq!(cursor.next().unwrap().url(), "/b");
        assert!(cursor.next().is_none());
        // Stays past the end
        assert!(cursor.next().is_none());
        assert!(!cursor.valid());

        assert_eq!(cursor.rewind().unwrap().url(), "/a");
        assert_eq!(cursor.key(), Some(0));
    }

    #[test]
    fn test_empty_trail() {
        let trail = Trail::new();
        let mut cursor = trail.cursor();

        assert!(cursor.rewind().is_none());
        assert!(!cursor.valid());
        assert_eq!(cursor.key(), None);
        assert!(cursor.current().is_none());
        assert!(cursor.next().is_none());
    }
}
