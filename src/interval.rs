//! A module containing [`Interval`], the half-open range type stored in a
//! [`RangeStore`](crate::RangeStore).

use core::fmt;
use core::ops::Range;

use smallvec::{smallvec, SmallVec};

use crate::utils::cut_interval;
use crate::{InvalidRange, PointType};

/// A half-open interval `[low, high)` over the point type `I`.
///
/// The fields are private so that `low <= high` always holds; an interval
/// with `low == high` is the empty interval and is never stored in a
/// [`RangeStore`](crate::RangeStore).
///
/// The derived ordering compares `low` first, which is the order intervals
/// are enumerated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<I> {
	pub(crate) low: I,
	pub(crate) high: I,
}

impl<I> Interval<I>
where
	I: PointType,
{
	/// Makes a new `[low, high)` interval.
	///
	/// Returns [`InvalidRange::Reversed`] if `low > high`. `low == high` is
	/// accepted and gives the empty interval.
	///
	/// # Examples
	/// ```
	/// use rangelist::{Interval, InvalidRange};
	///
	/// assert!(Interval::new(1, 5).is_ok());
	/// assert!(Interval::new(2, 2).unwrap().is_empty());
	/// assert!(matches!(
	/// 	Interval::new(3, 2),
	/// 	Err(InvalidRange::Reversed { .. })
	/// ));
	/// ```
	pub fn new(low: I, high: I) -> Result<Self, InvalidRange> {
		if low > high {
			return Err(InvalidRange::Reversed {
				low: low.to_string(),
				high: high.to_string(),
			});
		}

		Ok(Interval { low, high })
	}

	/// The inclusive start of the interval.
	pub fn low(&self) -> I {
		self.low
	}

	/// The exclusive end of the interval.
	pub fn high(&self) -> I {
		self.high
	}

	/// Returns `true` if the interval contains no points.
	pub fn is_empty(&self) -> bool {
		self.low == self.high
	}

	/// Returns `true` if `point` lies inside `[low, high)`.
	pub fn contains(&self, point: I) -> bool {
		point >= self.low && point < self.high
	}

	/// Returns `true` if the two intervals share at least one point.
	///
	/// Empty intervals overlap nothing.
	///
	/// # Examples
	/// ```
	/// use rangelist::Interval;
	///
	/// let a = Interval::new(10, 20).unwrap();
	///
	/// assert!(a.overlaps(&Interval::new(19, 30).unwrap()));
	/// assert!(!a.overlaps(&Interval::new(20, 30).unwrap()));
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		!self.is_empty()
			&& !other.is_empty()
			&& self.low < other.high
			&& other.low < self.high
	}

	/// Returns `true` if the two intervals overlap or meet at a boundary,
	/// treating both ends as closed.
	///
	/// This is the search semantics of an
	/// [`IntervalIndex`](crate::IntervalIndex) and the reason touching
	/// intervals are merged on insertion.
	///
	/// # Examples
	/// ```
	/// use rangelist::Interval;
	///
	/// let a = Interval::new(10, 20).unwrap();
	///
	/// assert!(a.touches_or_overlaps(&Interval::new(20, 21).unwrap()));
	/// assert!(!a.touches_or_overlaps(&Interval::new(21, 22).unwrap()));
	/// ```
	pub fn touches_or_overlaps(&self, other: &Self) -> bool {
		self.low <= other.high && other.low <= self.high
	}

	/// The smallest interval covering both `self` and `other`.
	pub fn merge(&self, other: &Self) -> Self {
		Interval {
			low: I::min(self.low, other.low),
			high: I::max(self.high, other.high),
		}
	}

	/// Returns what remains of `self` once the points of `to_remove` are
	/// taken out, in ascending order.
	///
	/// There are at most two pieces, and empty pieces are never returned.
	/// An empty `to_remove` or one lying wholly outside `self` leaves
	/// `self` unchanged.
	///
	/// # Examples
	/// ```
	/// use rangelist::Interval;
	///
	/// let base = Interval::new(-9, 10).unwrap();
	///
	/// assert_eq!(
	/// 	base.difference(&Interval::new(0, 9).unwrap()).as_slice(),
	/// 	[Interval::new(-9, 0).unwrap(), Interval::new(9, 10).unwrap()]
	/// );
	/// assert!(base.difference(&Interval::new(-10, 10).unwrap()).is_empty());
	/// ```
	pub fn difference(&self, to_remove: &Self) -> SmallVec<[Self; 2]> {
		if to_remove.is_empty() {
			return smallvec![*self];
		}

		let cut_result = cut_interval(*self, *to_remove);

		cut_result
			.before_cut
			.into_iter()
			.chain(cut_result.after_cut)
			.collect()
	}
}

impl<I> fmt::Display for Interval<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {})", self.low, self.high)
	}
}

impl<I> From<Interval<I>> for Range<I> {
	fn from(interval: Interval<I>) -> Self {
		interval.low..interval.high
	}
}
