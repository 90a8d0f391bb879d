//! Persistent (immutable) collections.
//!
//! - [`ImmList`]: ordered sequence over a shared slice
//! - [`ImmSet`]: insertion-ordered set without duplicates
//!
//! Every operation returns a new collection and leaves its input untouched.
//! Storage is shared through `Rc`, or `Arc` when the `arc` feature is enabled,
//! in which case the collections are `Send + Sync` for `Send + Sync` elements.
//!
//! # Examples
//!
//! ```rust
//! use kindred::persistent::{ImmList, ImmSet};
//!
//! let list: ImmList<i32> = (1..=3).collect();
//! let set: ImmSet<i32> = list.iter().chain(list.iter()).copied().collect();
//! assert_eq!(set.len(), 3);
//! ```

use crate::ReferenceCounter;

mod list;
mod set;

pub use list::{ImmList, ImmListIntoIterator, ListView};
pub use set::ImmSet;
