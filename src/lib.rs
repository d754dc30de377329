//! This crate provides [`RangeStore`], a collection of disjoint half-open
//! integer ranges which merges ranges as they are added and splits them as
//! parts of them are removed.
//!
//! ## Example
//!
//! ```rust
//! use rangelist::RangeStore;
//!
//! let mut store = RangeStore::new();
//!
//! store.add([1, 5]).unwrap();
//! store.add([10, 20]).unwrap();
//! store.add([20, 21]).unwrap();
//! store.add([3, 8]).unwrap();
//! assert_eq!(store.to_string(), "[1, 8) [10, 21)");
//!
//! store.remove([10, 11]).unwrap();
//! store.remove([15, 17]).unwrap();
//! assert_eq!(store.to_string(), "[1, 8) [11, 15) [17, 21)");
//!
//! store.remove([3, 19]).unwrap();
//! assert_eq!(store.to_string(), "[1, 3) [19, 21)");
//!
//! assert_eq!(store.contains_point(2), true);
//! assert_eq!(store.contains_point(3), false);
//! ```
//!
//! ## Example using a different index
//!
//! ```rust
//! use rangelist::{Interval, RangeStore, SortedVecIndex};
//!
//! let mut store: RangeStore<i32, _> =
//! 	RangeStore::with_index(SortedVecIndex::new());
//!
//! store.add("[0, 100)").unwrap();
//! store.remove(40..60).unwrap();
//!
//! for interval in store.iter() {
//! 	println!("{interval} is still stored");
//! }
//!
//! assert_eq!(
//! 	store.snapshot(),
//! 	[Interval::new(0, 40).unwrap(), Interval::new(60, 100).unwrap()]
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Half-open ranges
//!
//! Every range in this crate is half-open: `[1, 5)` contains the points
//! `1`, `2`, `3` and `4` but not `5`. Ranges are given as a pair of bounds,
//! `[low, high]`, where the second bound is the exclusive end.
//!
//! ### Valid ranges
//!
//! A range is valid if it has exactly two bounds, both bounds are integers
//! and `low <= high`. A range with `low == high` is valid but empty, it
//! contains no points, and adding or removing it does nothing. See
//! [`RangeInput`] for the shapes of input that are accepted.
//!
//! | range      | valid |
//! | ---------- | ----- |
//! | `[1, 2]`   | YES   |
//! | `[2, 2]`   | YES   |
//! | `[3, 2]`   | NO    |
//! | `[1, 2, 3]`| NO    |
//! | `"a,b"`    | NO    |
//!
//! ### Overlap
//!
//! Two ranges are "overlapping" if there exists a point that is contained
//! within both ranges.
//!
//! ### Touching
//!
//! Two ranges are "touching" if they do not overlap but the end of one is
//! the start of the other. For example, `[2, 4)` and `[4, 6)` are touching
//! but `[2, 4)` and `[5, 8)` are not.
//!
//! ### Merging
//!
//! When a range is added it absorbs every stored range it overlaps or
//! touches, so a [`RangeStore`] never holds two ranges that could be
//! written as one.
//!
//! ### Indexes
//!
//! A [`RangeStore`] keeps its ranges in an [`IntervalIndex`]. The default
//! is [`BTreeIndex`], [`SortedVecIndex`] is also provided, and any other
//! searchable interval structure can be plugged in with
//! [`RangeStore::with_index()`].
//!
//! ### Logging
//!
//! Adding and removing ranges emits [`tracing`] events at the `trace`
//! level, and rejected input is reported at the `debug` level. No
//! subscriber is installed by this crate.
//!
//! [`tracing`]: https://docs.rs/tracing

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

#[cfg(test)]
pub(crate) mod test_ranges;
pub(crate) mod utils;

pub mod error;
pub mod index;
pub mod input;
pub mod interval;
pub mod point_type;
pub mod range_store;

pub use crate::error::InvalidRange;
pub use crate::index::{BTreeIndex, IntervalIndex, SortedVecIndex};
pub use crate::input::{validate, RangeInput};
pub use crate::interval::Interval;
pub use crate::point_type::PointType;
pub use crate::range_store::{diff_interval, RangeStore};
