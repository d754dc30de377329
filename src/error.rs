//! A module containing [`InvalidRange`], the only error this crate returns.

use thiserror::Error;

/// The error returned when a candidate range fails validation.
///
/// Every operation which returns this error does so before touching the
/// store, so the store is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRange {
	/// The input did not consist of exactly two bounds.
	#[error("invalid range: expected a pair of bounds but found {found}")]
	WrongShape {
		/// How many bounds were actually given.
		found: usize,
	},
	/// One of the bounds could not be parsed as an integer.
	#[error("invalid range: bound {bound:?} is not an integer")]
	NotNumeric {
		/// The offending bound as it was given.
		bound: String,
	},
	/// The start of the range comes after its end.
	#[error("invalid range: start {low} is greater than end {high}")]
	Reversed {
		/// The start of the rejected range.
		low: String,
		/// The end of the rejected range.
		high: String,
	},
}
