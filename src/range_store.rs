//! A module containing [`RangeStore`] and [`diff_interval()`].

use core::fmt;
use core::marker::PhantomData;

use itertools::Itertools;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
	BTreeIndex, Interval, IntervalIndex, InvalidRange, PointType, RangeInput,
};

/// A collection of disjoint half-open ranges over the point type `I`,
/// stored in an [`IntervalIndex`] of type `X`.
///
/// Adding a range merges it with every stored range it overlaps or touches,
/// removing a range cuts it out of every stored range it overlaps. After
/// every operation the stored ranges are non-empty, pairwise disjoint and
/// never touching, so they are the smallest set of ranges covering exactly
/// the points added and not since removed.
///
/// # Examples
/// ```
/// use rangelist::RangeStore;
///
/// let mut store = RangeStore::new();
///
/// store.add([1, 5]).unwrap();
/// store.add([10, 20]).unwrap();
/// store.add([20, 21]).unwrap();
/// assert_eq!(store.to_string(), "[1, 5) [10, 21)");
///
/// store.remove([15, 17]).unwrap();
/// assert_eq!(store.to_string(), "[1, 5) [10, 15) [17, 21)");
///
/// assert!(store.add([3, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeStore<I, X = BTreeIndex<I>> {
	index: X,
	phantom: PhantomData<I>,
}

impl<I> RangeStore<I>
where
	I: PointType,
{
	/// Makes a new, empty `RangeStore` backed by a [`BTreeIndex`].
	///
	/// # Examples
	/// ```
	/// use rangelist::RangeStore;
	///
	/// let store: RangeStore<i64> = RangeStore::new();
	///
	/// assert!(store.is_empty());
	/// ```
	pub fn new() -> Self {
		RangeStore::with_index(BTreeIndex::new())
	}
}

impl<I, X> RangeStore<I, X>
where
	I: PointType,
	X: IntervalIndex<I>,
{
	/// Makes a new, empty `RangeStore` backed by `index`.
	///
	/// Anything already stored in `index` is discarded.
	///
	/// # Examples
	/// ```
	/// use rangelist::{RangeStore, SortedVecIndex};
	///
	/// let mut store = RangeStore::with_index(SortedVecIndex::new());
	///
	/// store.add([1, 5]).unwrap();
	/// assert_eq!(store.len(), 1);
	/// ```
	pub fn with_index(mut index: X) -> Self {
		index.clear();

		RangeStore {
			index,
			phantom: PhantomData,
		}
	}

	/// Makes a new `RangeStore` holding the union of every range in
	/// `ranges`.
	///
	/// Every range is validated before any of them is added, so on error
	/// nothing is built.
	///
	/// # Examples
	/// ```
	/// use rangelist::{RangeStore, InvalidRange};
	///
	/// let store: RangeStore<i32> =
	/// 	RangeStore::from_ranges([[1, 5], [3, 8], [10, 12]]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 8) [10, 12)");
	///
	/// assert!(matches!(
	/// 	RangeStore::<i32>::from_ranges([[1, 5], [8, 3]]),
	/// 	Err(InvalidRange::Reversed { .. })
	/// ));
	/// ```
	pub fn from_ranges<R>(
		ranges: impl IntoIterator<Item = R>,
	) -> Result<Self, InvalidRange>
	where
		R: RangeInput<I>,
		X: Default,
	{
		let intervals: Vec<Interval<I>> = ranges
			.into_iter()
			.map(|range| range.into_interval())
			.collect::<Result<_, _>>()?;

		let mut store = RangeStore::with_index(X::default());
		for interval in intervals {
			store.add(interval)?;
		}

		return Ok(store);
	}

	/// Adds every point of `range` to the store.
	///
	/// Stored ranges that overlap `range` or touch it at either end are
	/// removed and replaced by a single range covering all of them and
	/// `range`. Adding an empty range does nothing.
	///
	/// Returns [`InvalidRange`] without changing the store if `range` is
	/// not a valid range, see [`RangeInput`].
	///
	/// # Examples
	/// ```
	/// use rangelist::RangeStore;
	///
	/// let mut store = RangeStore::new();
	///
	/// store.add([1, 5]).unwrap();
	/// store.add([10, 20]).unwrap();
	/// store.add([20, 20]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 5) [10, 20)");
	///
	/// store.add([3, 8]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 8) [10, 20)");
	///
	/// store.add([8, 10]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 20)");
	/// ```
	pub fn add(&mut self, range: impl RangeInput<I>) -> Result<(), InvalidRange> {
		let range = range
			.into_interval()
			.inspect_err(|error| debug!(%error, "rejected range to add"))?;

		if range.is_empty() {
			trace!(%range, "ignoring empty range to add");
			return Ok(());
		}

		let overlapping = self.index.search(range);

		if overlapping.is_empty() {
			trace!(%range, "inserting range");
			self.index.insert(range);
			return Ok(());
		}

		let merged = overlapping
			.iter()
			.fold(range, |merged, interval| merged.merge(interval));

		for interval in overlapping.iter() {
			self.index.remove(*interval);
		}

		trace!(%range, %merged, absorbed = overlapping.len(), "merging range");
		self.index.insert(merged);

		Ok(())
	}

	/// Removes every point of `range` from the store.
	///
	/// Stored ranges overlapping `range` are shrunk or split around it,
	/// or removed entirely if `range` covers them. Stored ranges merely
	/// touching `range` are left as they are. Removing an empty range does
	/// nothing.
	///
	/// Returns [`InvalidRange`] without changing the store if `range` is
	/// not a valid range, see [`RangeInput`].
	///
	/// # Examples
	/// ```
	/// use rangelist::RangeStore;
	///
	/// let mut store: RangeStore<i32> =
	/// 	RangeStore::from_ranges([[1, 8], [10, 21]]).unwrap();
	///
	/// store.remove([10, 11]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 8) [11, 21)");
	///
	/// store.remove([15, 17]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 8) [11, 15) [17, 21)");
	///
	/// store.remove([3, 19]).unwrap();
	/// assert_eq!(store.to_string(), "[1, 3) [19, 21)");
	/// ```
	pub fn remove(
		&mut self,
		range: impl RangeInput<I>,
	) -> Result<(), InvalidRange> {
		let range = range
			.into_interval()
			.inspect_err(|error| debug!(%error, "rejected range to remove"))?;

		if range.is_empty() {
			trace!(%range, "ignoring empty range to remove");
			return Ok(());
		}

		for interval in self.index.search(range) {
			self.index.remove(interval);

			let remaining = interval.difference(&range);
			trace!(
				%interval,
				%range,
				remaining = remaining.len(),
				"cutting range"
			);

			for piece in remaining {
				self.index.insert(piece);
			}
		}

		Ok(())
	}

	/// Returns the stored ranges in ascending order.
	///
	/// # Examples
	/// ```
	/// use rangelist::{Interval, RangeStore};
	///
	/// let mut store = RangeStore::new();
	///
	/// store.add([10, 20]).unwrap();
	/// store.add([1, 5]).unwrap();
	///
	/// assert_eq!(
	/// 	store.snapshot(),
	/// 	[Interval::new(1, 5).unwrap(), Interval::new(10, 20).unwrap()]
	/// );
	/// ```
	pub fn snapshot(&self) -> Vec<Interval<I>> {
		self.index.all().into_iter().sorted_unstable().collect()
	}

	/// Returns an iterator over the stored ranges in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = Interval<I>> {
		self.snapshot().into_iter()
	}

	/// Returns `true` if `point` is covered by one of the stored ranges.
	///
	/// # Examples
	/// ```
	/// use rangelist::RangeStore;
	///
	/// let mut store = RangeStore::new();
	///
	/// store.add([1, 5]).unwrap();
	///
	/// assert_eq!(store.contains_point(0), false);
	/// assert_eq!(store.contains_point(1), true);
	/// assert_eq!(store.contains_point(5), false);
	/// ```
	pub fn contains_point(&self, point: I) -> bool {
		self.index
			.search(Interval {
				low: point,
				high: point,
			})
			.iter()
			.any(|interval| interval.contains(point))
	}

	/// Returns `true` if `range` shares at least one point with the stored
	/// ranges. Touching a stored range does not count, and an empty range
	/// overlaps nothing.
	///
	/// Returns [`InvalidRange`] if `range` is not a valid range.
	///
	/// # Examples
	/// ```
	/// use rangelist::RangeStore;
	///
	/// let mut store = RangeStore::new();
	///
	/// store.add([10, 20]).unwrap();
	///
	/// assert_eq!(store.overlaps([5, 10]), Ok(false));
	/// assert_eq!(store.overlaps([5, 11]), Ok(true));
	/// assert!(store.overlaps([11, 5]).is_err());
	/// ```
	pub fn overlaps(
		&self,
		range: impl RangeInput<I>,
	) -> Result<bool, InvalidRange> {
		let range = range.into_interval()?;

		if range.is_empty() {
			return Ok(false);
		}

		Ok(self
			.index
			.search(range)
			.iter()
			.any(|interval| interval.overlaps(&range)))
	}

	/// The number of disjoint ranges stored.
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Returns `true` if the store covers no points.
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Removes every stored range.
	pub fn clear(&mut self) {
		self.index.clear()
	}
}

impl<I, X> Default for RangeStore<I, X>
where
	I: PointType,
	X: IntervalIndex<I> + Default,
{
	fn default() -> Self {
		RangeStore::with_index(X::default())
	}
}

/// Renders the stored ranges in ascending order separated by spaces, such
/// as `[1, 5) [10, 21)`.
impl<I, X> fmt::Display for RangeStore<I, X>
where
	I: PointType,
	X: IntervalIndex<I>,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.iter().join(" "))
	}
}

/// Computes `interval - to_remove`: the pieces of `interval` left once the
/// points of `to_remove` are taken out, in ascending order.
///
/// Returns [`InvalidRange`] if either argument is not a valid range. See
/// [`Interval::difference()`] for the rules.
///
/// # Examples
/// ```
/// use rangelist::{diff_interval, Interval, InvalidRange};
///
/// assert_eq!(
/// 	diff_interval([0, 1], [1, 1]).unwrap().as_slice(),
/// 	[Interval::new(0, 1).unwrap()]
/// );
/// assert_eq!(
/// 	diff_interval([-9, 10], [0, 9]).unwrap().as_slice(),
/// 	[Interval::new(-9, 0).unwrap(), Interval::new(9, 10).unwrap()]
/// );
/// assert!(diff_interval([-9, 10], [-10, 10]).unwrap().is_empty());
/// assert!(matches!(
/// 	diff_interval([2, 1], [0, 9]),
/// 	Err(InvalidRange::Reversed { .. })
/// ));
/// ```
pub fn diff_interval<I>(
	interval: impl RangeInput<I>,
	to_remove: impl RangeInput<I>,
) -> Result<SmallVec<[Interval<I>; 2]>, InvalidRange>
where
	I: PointType,
{
	let interval = interval.into_interval()?;
	let to_remove = to_remove.into_interval()?;

	Ok(interval.difference(&to_remove))
}
