use crate::Interval;

/// An included-excluded interval, skipping validation.
pub(crate) fn ie(low: i32, high: i32) -> Interval<i32> {
	assert!(low <= high, "test interval [{low}, {high}) is reversed");
	Interval { low, high }
}
