//! A fixed-size Fenwick tree (binary indexed tree).
//!
//! Point updates and prefix-sum queries over an array of `n` integers, both in `O(log n)`, with
//! `n + 1` machine words of storage. Range sums fall out of two prefix queries.
//!
//! Indexing is 1-based throughout the public API; index 0 is the sentinel the `lowbit`
//! traversal relies on, and `query(0)` is the empty prefix.
//!
//! ```
//! use fenwick::FenwickTree;
//!
//! let mut t = FenwickTree::new(5);
//! t.build(&[0, 1, 3, -2, 5, 4])?; // values[0] is ignored
//! assert_eq!(t.query(3)?, 2);
//! assert_eq!(t.query_range(2, 4)?, 6);
//!
//! t.update(3, 3)?;
//! assert_eq!(t.query_range(2, 4)?, 9);
//! assert_eq!(t.query_range(4, 2)?, 0);
//! # Ok::<(), fenwick::FenwickError>(())
//! ```
//!
//! The tree is a plain owned value: mutation needs `&mut self`, so sharing it across threads
//! takes an external lock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bits;
mod error;
mod fenwick;


pub use bits::lowbit;
pub use error::FenwickError;
pub use fenwick::FenwickTree;
