use crate::{Interval, PointType};

#[derive(Debug, PartialEq)]
pub(crate) enum Config {
	LeftFirstNonOverlapping,
	LeftFirstPartialOverlap,
	LeftContainsRight,

	RightFirstNonOverlapping,
	RightFirstPartialOverlap,
	RightContainsLeft,
}
/// Classifies how two non-empty half-open intervals sit relative to each
/// other. Touching intervals count as non-overlapping.
pub(crate) fn config<I>(a: Interval<I>, b: Interval<I>) -> Config
where
	I: PointType,
{
	if a.low < b.low {
		match (b.low < a.high, b.high <= a.high) {
			(false, _) => Config::LeftFirstNonOverlapping,
			(true, false) => Config::LeftFirstPartialOverlap,
			(true, true) => Config::LeftContainsRight,
		}
	} else {
		match (a.low < b.high, a.high <= b.high) {
			(false, _) => Config::RightFirstNonOverlapping,
			(true, false) => Config::RightFirstPartialOverlap,
			(true, true) => Config::RightContainsLeft,
		}
	}
}

#[derive(Debug, PartialEq)]
pub(crate) struct CutResult<I> {
	pub(crate) before_cut: Option<Interval<I>>,
	pub(crate) after_cut: Option<Interval<I>>,
}
/// Cuts `cut` out of `base`, keeping the parts of `base` on either side.
///
/// `cut` must not be empty.
pub(crate) fn cut_interval<I>(base: Interval<I>, cut: Interval<I>) -> CutResult<I>
where
	I: PointType,
{
	let mut result = CutResult {
		before_cut: None,
		after_cut: None,
	};

	match config(base, cut) {
		Config::LeftFirstNonOverlapping => {
			result.before_cut = Some(base);
		}
		Config::LeftFirstPartialOverlap => {
			result.before_cut = Some(Interval {
				low: base.low,
				high: cut.low,
			});
		}
		Config::LeftContainsRight => {
			result.before_cut = Some(Interval {
				low: base.low,
				high: cut.low,
			});
			result.after_cut = Some(Interval {
				low: cut.high,
				high: base.high,
			});
		}
		Config::RightFirstNonOverlapping => {
			result.after_cut = Some(base);
		}
		Config::RightFirstPartialOverlap => {
			result.after_cut = Some(Interval {
				low: cut.high,
				high: base.high,
			});
		}
		Config::RightContainsLeft => {}
	}

	//only return non-empty intervals
	return CutResult {
		before_cut: result.before_cut.filter(|x| !x.is_empty()),
		after_cut: result.after_cut.filter(|x| !x.is_empty()),
	};
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::ie;

	#[test]
	fn config_tests() {
		assert_eq!(config(ie(1, 5), ie(6, 8)), Config::LeftFirstNonOverlapping);
		assert_eq!(config(ie(1, 5), ie(5, 8)), Config::LeftFirstNonOverlapping);
		assert_eq!(config(ie(1, 5), ie(3, 8)), Config::LeftFirstPartialOverlap);
		assert_eq!(config(ie(1, 8), ie(3, 5)), Config::LeftContainsRight);
		assert_eq!(config(ie(1, 8), ie(3, 8)), Config::LeftContainsRight);

		assert_eq!(config(ie(6, 8), ie(1, 5)), Config::RightFirstNonOverlapping);
		assert_eq!(config(ie(5, 8), ie(1, 5)), Config::RightFirstNonOverlapping);
		assert_eq!(config(ie(3, 8), ie(1, 5)), Config::RightFirstPartialOverlap);
		assert_eq!(config(ie(3, 5), ie(1, 8)), Config::RightContainsLeft);
		assert_eq!(config(ie(1, 5), ie(1, 8)), Config::RightContainsLeft);
		assert_eq!(config(ie(1, 8), ie(1, 5)), Config::RightFirstPartialOverlap);
	}

	#[test]
	fn cut_interval_tests() {
		assert_eq!(
			cut_interval(ie(1, 10), ie(3, 5)),
			CutResult {
				before_cut: Some(ie(1, 3)),
				after_cut: Some(ie(5, 10)),
			}
		);
		assert_eq!(
			cut_interval(ie(1, 10), ie(1, 5)),
			CutResult {
				before_cut: None,
				after_cut: Some(ie(5, 10)),
			}
		);
		assert_eq!(
			cut_interval(ie(1, 10), ie(5, 10)),
			CutResult {
				before_cut: Some(ie(1, 5)),
				after_cut: None,
			}
		);
		assert_eq!(
			cut_interval(ie(1, 10), ie(0, 11)),
			CutResult {
				before_cut: None,
				after_cut: None,
			}
		);
		assert_eq!(
			cut_interval(ie(1, 10), ie(10, 11)),
			CutResult {
				before_cut: Some(ie(1, 10)),
				after_cut: None,
			}
		);
		assert_eq!(
			cut_interval(ie(1, 10), ie(-1, 1)),
			CutResult {
				before_cut: None,
				after_cut: Some(ie(1, 10)),
			}
		);
	}

	#[test]
	fn cut_interval_should_return_non_empty_intervals() {
		for base in all_valid_test_intervals() {
			for cut in all_valid_test_intervals() {
				let cut_result = cut_interval(base, cut);

				for piece in [cut_result.before_cut, cut_result.after_cut]
					.into_iter()
					.flatten()
				{
					assert!(!piece.is_empty());
					assert!(base.low <= piece.low && piece.high <= base.high);
					assert!(!piece.overlaps(&cut));
				}
			}
		}
	}

	fn all_valid_test_intervals() -> Vec<Interval<i32>> {
		let mut output = Vec::new();
		for low in 0..6 {
			for high in (low + 1)..7 {
				output.push(ie(low, high));
			}
		}
		output
	}
}
