//! A module containing the [`RangeInput`] trait, the shapes of input the
//! store accepts as a range, and [`validate()`].
//!
//! Callers do not always hold a well-formed pair of integers: bounds may
//! come from a slice of the wrong length, from text, or be missing
//! altogether. Every such shape is converted through [`RangeInput`] so that
//! all of them are rejected with the same [`InvalidRange`] error.

use core::ops::Range;

use crate::{Interval, InvalidRange, PointType};

/// Something which can be checked and turned into an [`Interval`].
///
/// A candidate is valid iff it has exactly two bounds, both are integers
/// of type `I`, and the first is not greater than the second. Two equal
/// bounds are valid and describe the empty range.
///
/// # Examples
/// ```
/// use rangelist::{Interval, InvalidRange, RangeInput};
///
/// assert_eq!([1, 5].into_interval(), Interval::new(1, 5));
/// assert_eq!((1, 5).into_interval(), Interval::new(1, 5));
/// assert_eq!("[1, 5)".into_interval(), Interval::new(1, 5));
///
/// assert_eq!(
/// 	RangeInput::<i32>::into_interval(&[1, 2, 3][..]),
/// 	Err(InvalidRange::WrongShape { found: 3 })
/// );
/// ```
pub trait RangeInput<I> {
	/// Validates the candidate and converts it into an [`Interval`].
	fn into_interval(self) -> Result<Interval<I>, InvalidRange>;
}

/// Returns `true` if `range` is a valid candidate range.
///
/// # Examples
/// ```
/// use rangelist::validate;
///
/// assert_eq!(validate::<i32>([1, 2]), true);
/// assert_eq!(validate::<i32>([2, 2]), true);
/// assert_eq!(validate::<i32>([3, 2]), false);
/// assert_eq!(validate::<i32>("a,b"), false);
/// assert_eq!(validate::<i32>(&[][..]), false);
/// assert_eq!(validate::<i32>(None::<[i32; 2]>), false);
/// ```
pub fn validate<I>(range: impl RangeInput<I>) -> bool {
	range.into_interval().is_ok()
}

impl<I> RangeInput<I> for Interval<I> {
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		Ok(self)
	}
}

impl<I> RangeInput<I> for [I; 2]
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		let [low, high] = self;
		Interval::new(low, high)
	}
}

impl<I> RangeInput<I> for (I, I)
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		Interval::new(self.0, self.1)
	}
}

impl<I> RangeInput<I> for Range<I>
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		Interval::new(self.start, self.end)
	}
}

impl<I> RangeInput<I> for &[I]
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		match *self {
			[low, high] => Interval::new(low, high),
			_ => Err(InvalidRange::WrongShape { found: self.len() }),
		}
	}
}

impl<I> RangeInput<I> for Vec<I>
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		self.as_slice().into_interval()
	}
}

impl<I, R> RangeInput<I> for Option<R>
where
	R: RangeInput<I>,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		match self {
			Some(range) => range.into_interval(),
			None => Err(InvalidRange::WrongShape { found: 0 }),
		}
	}
}

/// Accepts `"1,5"`, `"[1, 5]"` and `"[1, 5)"`, with any surrounding
/// whitespace. Brackets must either both be present or both be absent.
impl<I> RangeInput<I> for &str
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		let trimmed = self.trim();
		let trimmed = match trimmed.strip_prefix('[') {
			Some(open) => open
				.strip_suffix(']')
				.or_else(|| open.strip_suffix(')'))
				.ok_or(InvalidRange::WrongShape { found: 0 })?,
			None if trimmed.ends_with([']', ')']) => {
				return Err(InvalidRange::WrongShape { found: 0 });
			}
			None => trimmed,
		};

		if trimmed.trim().is_empty() {
			return Err(InvalidRange::WrongShape { found: 0 });
		}

		let bounds: Vec<&str> = trimmed.split(',').map(str::trim).collect();
		match bounds.as_slice() {
			[low, high] => Interval::new(parse_bound(low)?, parse_bound(high)?),
			_ => Err(InvalidRange::WrongShape {
				found: bounds.len(),
			}),
		}
	}
}

impl<I> RangeInput<I> for String
where
	I: PointType,
{
	fn into_interval(self) -> Result<Interval<I>, InvalidRange> {
		self.as_str().into_interval()
	}
}

fn parse_bound<I>(bound: &str) -> Result<I, InvalidRange>
where
	I: PointType,
{
	bound.parse().map_err(|_| InvalidRange::NotNumeric {
		bound: bound.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::ie;

	#[test]
	fn validate_tests() {
		assert!(!validate::<i32>(&[][..]));
		assert!(!validate::<i32>(None::<[i32; 2]>));
		assert!(!validate::<i32>("233"));
		assert!(!validate::<i32>("a"));
		assert!(!validate::<i32>("a,b"));
		assert!(!validate::<i32>(&[1, 2, 3][..]));
		assert!(!validate::<i32>([3, 2]));
		assert!(validate::<i32>([2, 2]));
		assert!(validate::<i32>([1, 2]));
	}

	#[test]
	fn slice_input_tests() {
		assert_eq!((&[1, 5][..]).into_interval(), Ok(ie(1, 5)));
		assert_eq!(
			RangeInput::<i32>::into_interval(&[7][..]),
			Err(InvalidRange::WrongShape { found: 1 })
		);
		assert_eq!(vec![4, 9].into_interval(), Ok(ie(4, 9)));
		assert_eq!(
			RangeInput::<i32>::into_interval(vec![1, 2, 3]),
			Err(InvalidRange::WrongShape { found: 3 })
		);
	}

	#[test]
	fn range_input_tests() {
		assert_eq!((1..5).into_interval(), Ok(ie(1, 5)));
		#[allow(clippy::reversed_empty_ranges)]
		let reversed = 5..1;
		assert_eq!(
			reversed.into_interval(),
			Err(InvalidRange::Reversed {
				low: "5".to_string(),
				high: "1".to_string(),
			})
		);
		assert_eq!(Some((2, 3)).into_interval(), Ok(ie(2, 3)));
	}

	#[test]
	fn str_input_tests() {
		assert_eq!("1,5".into_interval(), Ok(ie(1, 5)));
		assert_eq!(" [ -3 , 5 ] ".into_interval(), Ok(ie(-3, 5)));
		assert_eq!("[10, 20)".into_interval(), Ok(ie(10, 20)));
		assert_eq!(String::from("2,2").into_interval(), Ok(ie(2, 2)));

		assert_eq!(
			RangeInput::<i32>::into_interval(""),
			Err(InvalidRange::WrongShape { found: 0 })
		);
		assert_eq!(
			RangeInput::<i32>::into_interval("[]"),
			Err(InvalidRange::WrongShape { found: 0 })
		);
		for unbalanced in ["[1, 5", "1, 5)", "1, 5]", "[", ")"] {
			assert_eq!(
				RangeInput::<i32>::into_interval(unbalanced),
				Err(InvalidRange::WrongShape { found: 0 })
			);
		}
		assert!(!validate::<i32>("[1, 5"));
		assert!(!validate::<i32>(String::from("1, 5)")));
		assert_eq!(
			RangeInput::<i32>::into_interval("1,2,3"),
			Err(InvalidRange::WrongShape { found: 3 })
		);
		assert_eq!(
			RangeInput::<i32>::into_interval("a,b"),
			Err(InvalidRange::NotNumeric {
				bound: "a".to_string()
			})
		);
		assert_eq!(
			RangeInput::<i32>::into_interval("1.5,2"),
			Err(InvalidRange::NotNumeric {
				bound: "1.5".to_string()
			})
		);
		assert_eq!(
			RangeInput::<u8>::into_interval("1,300"),
			Err(InvalidRange::NotNumeric {
				bound: "300".to_string()
			})
		);
	}
}
