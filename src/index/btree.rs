use std::collections::BTreeMap;
use std::ops::Bound;

use super::IntervalIndex;
use crate::{Interval, PointType};

/// An [`IntervalIndex`] based on [`BTreeMap`], mapping the start of every
/// stored interval to its end.
///
/// Searching relies on the stored intervals being disjoint, which is the
/// case for every interval a [`RangeStore`](crate::RangeStore) inserts: the
/// only stored interval starting at or before a search range can be found
/// with a single predecessor lookup, and the rest are a contiguous run of
/// starts inside the search range.
///
/// This is the default index of a [`RangeStore`](crate::RangeStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTreeIndex<I> {
	inner: BTreeMap<I, I>,
}

impl<I> BTreeIndex<I> {
	/// Makes a new, empty `BTreeIndex`.
	pub fn new() -> Self {
		BTreeIndex {
			inner: BTreeMap::new(),
		}
	}
}

impl<I> Default for BTreeIndex<I> {
	fn default() -> Self {
		BTreeIndex::new()
	}
}

impl<I> IntervalIndex<I> for BTreeIndex<I>
where
	I: PointType,
{
	fn insert(&mut self, interval: Interval<I>) {
		self.inner.insert(interval.low, interval.high);
	}

	fn remove(&mut self, interval: Interval<I>) -> bool {
		if self.inner.get(&interval.low) != Some(&interval.high) {
			return false;
		}

		self.inner.remove(&interval.low).is_some()
	}

	fn search(&self, range: Interval<I>) -> Vec<Interval<I>> {
		let preceding = self
			.inner
			.range(..=range.low)
			.next_back()
			.filter(|(_, high)| **high >= range.low);

		let following = self
			.inner
			.range((Bound::Excluded(range.low), Bound::Included(range.high)));

		preceding
			.into_iter()
			.chain(following)
			.map(|(&low, &high)| Interval { low, high })
			.collect()
	}

	fn all(&self) -> Vec<Interval<I>> {
		self.inner
			.iter()
			.map(|(&low, &high)| Interval { low, high })
			.collect()
	}

	fn len(&self) -> usize {
		self.inner.len()
	}

	fn clear(&mut self) {
		self.inner.clear()
	}
}
