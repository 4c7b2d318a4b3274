#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A growable double-ended queue backed by a single contiguous buffer.
//!
//! [`Deque`] keeps its elements in one slice of its backing buffer, with
//! headroom on both sides. When either end runs out of room, the buffer is
//! doubled and the live range recentered, so both [`push_back`](Deque::push_back)
//! and [`push_front`](Deque::push_front) are amortized O(1), and indexing is a
//! single addition.
//!
//! Positions inside a deque are represented by [`Cursor`]s, which are random
//! access and bidirectional. A cursor remembers how many elements had been
//! pushed to (or popped from) the front when it was created, so it keeps
//! pointing at the same element when the front of the deque changes.
//!
//! # Examples
//! ```
//! use shift_deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque, [0, 1, 2]);
//!
//! deque.erase(1);
//! assert_eq!(deque, [0, 2]);
//!
//! (deque.begin_mut() + 1).insert(9);
//! assert_eq!(deque, [0, 9, 2]);
//! ```

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod cursor;
pub mod deque;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::cursor::{Cursor, DequeRef};
pub use crate::deque::Deque;

use core::fmt::{self, Display, Formatter};

/// The error type returned by the checked accessors [`Deque::at`] and
/// [`Deque::at_mut`] when the requested index is not less than the length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    index: usize,
    len: usize,
}

impl OutOfRange {
    #[inline(never)]
    #[cold]
    pub(crate) fn new<T>(index: usize, len: usize) -> Result<T> {
        Err(OutOfRange { index, len })
    }

    /// Returns the index that was requested.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the length of the deque at the time of the request.
    #[inline]
    pub fn deque_len(&self) -> usize {
        self.len
    }
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of range: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for OutOfRange {}

/// Shorthand for `core::result::Result<T, OutOfRange>`.
pub type Result<T, E = OutOfRange> = core::result::Result<T, E>;
