//! Breadcrumb Trail
//!
//! An ordered collection of navigation items, usually rendered as the
//! "You are here" line at the top of a page:
//! - `Item`: URL plus short title, long title and description
//! - `Trail`: push / pop / peek, membership by URL, iteration
//! - `Cursor`: rewind / valid / key / current / next over a borrowed trail
//!
//! Rendering is left to callers.

mod cursor;
mod error;
mod item;
mod trail;

pub use cursor::Cursor;
pub use error::{ErrorKind, TrailError};
pub use item::Item;
pub use trail::{IntoIter, Iter, Trail};

pub type Result<T> = std::result::Result<T, TrailError>;
