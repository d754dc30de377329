//! A module containing the [`IntervalIndex`] trait and the two indexes
//! shipped with this crate.
//!
//! A [`RangeStore`](crate::RangeStore) never looks at its intervals
//! directly, it only inserts, removes and searches through its index. Any
//! structure that can answer "which stored intervals share a point with
//! this range" can back a store.

mod btree;
mod sorted_vec;

pub use btree::BTreeIndex;
pub use sorted_vec::SortedVecIndex;

use crate::Interval;

/// A searchable collection of intervals.
///
/// The index does not merge or split anything itself, it stores exactly the
/// intervals it is given. A [`RangeStore`](crate::RangeStore) only ever
/// inserts non-empty intervals that do not overlap anything already stored.
pub trait IntervalIndex<I> {
	/// Adds `interval` to the index.
	fn insert(&mut self, interval: Interval<I>);

	/// Removes the stored interval exactly equal to `interval`, returning
	/// `true` if there was one.
	fn remove(&mut self, interval: Interval<I>) -> bool;

	/// Returns every stored interval sharing at least one point with
	/// `range` where both ends are treated as closed, so intervals that
	/// only touch `range` at a boundary are returned too.
	///
	/// The order of the returned intervals is unspecified.
	fn search(&self, range: Interval<I>) -> Vec<Interval<I>>;

	/// Returns every stored interval, in unspecified order.
	fn all(&self) -> Vec<Interval<I>>;

	/// The number of stored intervals.
	fn len(&self) -> usize;

	/// Returns `true` if nothing is stored.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Removes every stored interval.
	fn clear(&mut self);
}

#[cfg(test)]
pub(crate) mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::ie;

	/// Wraps another index and hands search results back in reverse order,
	/// to check that nothing relies on the order of search results.
	#[derive(Debug, Default)]
	pub(crate) struct ReversedIndex<X>(pub(crate) X);

	impl<I, X> IntervalIndex<I> for ReversedIndex<X>
	where
		X: IntervalIndex<I>,
	{
		fn insert(&mut self, interval: Interval<I>) {
			self.0.insert(interval)
		}
		fn remove(&mut self, interval: Interval<I>) -> bool {
			self.0.remove(interval)
		}
		fn search(&self, range: Interval<I>) -> Vec<Interval<I>> {
			let mut result = self.0.search(range);
			result.reverse();
			result
		}
		fn all(&self) -> Vec<Interval<I>> {
			let mut result = self.0.all();
			result.reverse();
			result
		}
		fn len(&self) -> usize {
			self.0.len()
		}
		fn clear(&mut self) {
			self.0.clear()
		}
	}

	fn basic<X>() -> X
	where
		X: IntervalIndex<i32> + Default,
	{
		let mut index = X::default();
		index.insert(ie(1, 5));
		index.insert(ie(10, 20));
		index.insert(ie(30, 40));
		index
	}

	fn sorted(mut intervals: Vec<Interval<i32>>) -> Vec<Interval<i32>> {
		intervals.sort();
		intervals
	}

	fn search_tests<X>()
	where
		X: IntervalIndex<i32> + Default,
	{
		let index = basic::<X>();

		assert!(sorted(index.search(ie(6, 9))).is_empty());
		assert_eq!(sorted(index.search(ie(0, 1))), [ie(1, 5)]);
		assert_eq!(sorted(index.search(ie(5, 10))), [ie(1, 5), ie(10, 20)]);
		assert_eq!(sorted(index.search(ie(12, 15))), [ie(10, 20)]);
		assert_eq!(sorted(index.search(ie(20, 21))), [ie(10, 20)]);
		assert_eq!(sorted(index.search(ie(15, 15))), [ie(10, 20)]);
		assert!(sorted(index.search(ie(21, 29))).is_empty());
		assert_eq!(
			sorted(index.search(ie(-100, 100))),
			[ie(1, 5), ie(10, 20), ie(30, 40)]
		);
		assert_eq!(sorted(index.search(ie(40, 41))), [ie(30, 40)]);
		assert!(sorted(index.search(ie(41, 50))).is_empty());
	}

	fn insert_remove_tests<X>()
	where
		X: IntervalIndex<i32> + Default,
	{
		let mut index = basic::<X>();

		assert_eq!(index.len(), 3);
		assert!(!index.is_empty());

		assert!(!index.remove(ie(10, 19)));
		assert!(!index.remove(ie(11, 20)));
		assert_eq!(index.len(), 3);

		assert!(index.remove(ie(10, 20)));
		assert!(!index.remove(ie(10, 20)));
		assert_eq!(sorted(index.all()), [ie(1, 5), ie(30, 40)]);

		index.insert(ie(6, 8));
		assert_eq!(sorted(index.all()), [ie(1, 5), ie(6, 8), ie(30, 40)]);

		index.clear();
		assert!(index.is_empty());
		assert!(index.all().is_empty());
	}

	#[test]
	fn btree_index_tests() {
		search_tests::<BTreeIndex<i32>>();
		insert_remove_tests::<BTreeIndex<i32>>();
	}

	#[test]
	fn sorted_vec_index_tests() {
		search_tests::<SortedVecIndex<i32>>();
		insert_remove_tests::<SortedVecIndex<i32>>();
	}

	#[test]
	fn disjoint_search_tests() {
		let mut btree = BTreeIndex::new();
		let mut sorted_vec = SortedVecIndex::new();
		for low in [40, 0, 70, 10, 90, 30, 60, 20, 80, 50] {
			btree.insert(ie(low, low + 5));
			sorted_vec.insert(ie(low, low + 5));
		}

		let ranges = [(33, 33), (35, 40), (36, 39), (44, 61), (-5, 0), (95, 99)];
		for (low, high) in ranges {
			assert_eq!(
				sorted(sorted_vec.search(ie(low, high))),
				sorted(btree.search(ie(low, high)))
			);
		}
		assert_eq!(
			sorted(sorted_vec.search(ie(44, 61))),
			[ie(40, 45), ie(50, 55), ie(60, 65)]
		);
		assert!(sorted_vec.search(ie(36, 39)).is_empty());
	}

	#[test]
	fn reversed_index_tests() {
		search_tests::<ReversedIndex<BTreeIndex<i32>>>();
		insert_remove_tests::<ReversedIndex<SortedVecIndex<i32>>>();
	}
}
