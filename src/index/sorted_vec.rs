use super::IntervalIndex;
use crate::{Interval, PointType};

/// An [`IntervalIndex`] keeping its intervals in a [`Vec`] sorted by
/// start.
///
/// Searching relies on the stored intervals being disjoint, which is the
/// case for every interval a [`RangeStore`](crate::RangeStore) inserts: their
/// ends are then sorted as well as their starts, so the first candidate can
/// be found with a binary search on the ends and the rest follow it.
///
/// Insertion and removal are a binary search plus a shift. For the small
/// number of intervals most stores hold this is as fast as a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedVecIndex<I> {
	inner: Vec<Interval<I>>,
}

impl<I> SortedVecIndex<I> {
	/// Makes a new, empty `SortedVecIndex`.
	pub fn new() -> Self {
		SortedVecIndex { inner: Vec::new() }
	}
}

impl<I> Default for SortedVecIndex<I> {
	fn default() -> Self {
		SortedVecIndex::new()
	}
}

impl<I> IntervalIndex<I> for SortedVecIndex<I>
where
	I: PointType,
{
	fn insert(&mut self, interval: Interval<I>) {
		let position = self.inner.partition_point(|stored| *stored < interval);
		self.inner.insert(position, interval);
	}

	fn remove(&mut self, interval: Interval<I>) -> bool {
		match self.inner.binary_search(&interval) {
			Ok(position) => {
				self.inner.remove(position);
				true
			}
			Err(_) => false,
		}
	}

	fn search(&self, range: Interval<I>) -> Vec<Interval<I>> {
		let first = self.inner.partition_point(|stored| stored.high < range.low);

		self.inner[first..]
			.iter()
			.take_while(|stored| stored.low <= range.high)
			.copied()
			.collect()
	}

	fn all(&self) -> Vec<Interval<I>> {
		self.inner.clone()
	}

	fn len(&self) -> usize {
		self.inner.len()
	}

	fn clear(&mut self) {
		self.inner.clear()
	}
}
