//! Breadcrumb trail
//!
//! Items are kept in display order: the first push is the root crumb, the
//! last push is the current page.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cursor::Cursor;
use crate::error::TrailError;
use crate::item::Item;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    items: Vec<Item>,
}

impl Trail {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item, returning the new number of items.
    pub fn push(&mut self, item: Item) -> usize {
        tracing::debug!(url = %item.url(), position = self.items.len(), "Pushed breadcrumb item");
        self.items.push(item);
        self.items.len()
    }

    /// Decode and append an untyped item. Nothing is appended on error.
    pub fn push_value(&mut self, value: &Value) -> Result<usize> {
        let item = Item::from_value(value)?;
        Ok(self.push(item))
    }

    /// Remove and return the last item
    pub fn pop(&mut self) -> Result<Item> {
        let item = self.items.pop().ok_or(TrailError::Empty)?;
        tracing::debug!(url = %item.url(), remaining = self.items.len(), "Popped breadcrumb item");
        Ok(item)
    }

    /// Last item, without removing it
    pub fn peek_last(&self) -> Result<&Item> {
        self.items.last().ok_or(TrailError::Empty)
    }

    /// Alias of [`Trail::peek_last`].
    pub fn top(&self) -> Result<&Item> {
        self.peek_last()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any item has the same URL, scanning from the root.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|existing| existing.equals(item))
    }

    /// Like [`Trail::contains`], for an untyped value. The value is only
    /// decoded when there is an item to compare it with, so an empty trail
    /// answers `false` for anything.
    pub fn contains_value(&self, value: &Value) -> Result<bool> {
        if self.items.is_empty() {
            return Ok(false);
        }
        let item = Item::from_value(value)?;
        Ok(self.contains(&item))
    }

    /// Whether `item` is the current page, i.e. equal to the last crumb.
    pub fn is_last(&self, item: &Item) -> bool {
        self.items.last().is_some_and(|last| last.equals(item))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Fresh iterator in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            items: &self.items,
            front: 0,
            back: self.items.len(),
        }
    }

    /// Cursor positioned on the first item.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.items)
    }
}

/// Borrowing iterator over a [`Trail`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    items: &'a [Item],
    front: usize,
    back: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = &self.items[self.front];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.items[self.back])
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over a [`Trail`].
#[derive(Debug)]
pub struct IntoIter {
    inner: std::vec::IntoIter<Item>,
}

impl Iterator for IntoIter {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Trail {
    type Item = Item;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_iter(),
        }
    }
}

impl FromIterator<Item> for Trail {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut trail = Trail::new();
        trail.extend(iter);
        trail
    }
}

impl Extend<Item> for Trail {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
