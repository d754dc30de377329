//! A module containing the [`PointType`] trait and its impls for the
//! primitive integer datatypes.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// The marker trait for the integer types an [`Interval`] may span.
///
/// It is implemented for every primitive integer type and is not meant
/// to be implemented for anything else, the range semantics of this
/// crate are only defined for discrete, finite domains.
///
/// [`Interval`]: crate::Interval
pub trait PointType: Ord + Copy + Debug + Display + FromStr {}

macro_rules! point_type {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl PointType for $ident {}

		point_type!($($t)*);
	};
}

point_type!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);
