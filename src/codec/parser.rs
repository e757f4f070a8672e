//! Grouping of a selection into field segments.

use crate::error::Result;
use crate::selection::SelectionSet;
use crate::unit::UnitSpec;

use super::segment::Segment;

/// Shortest run of consecutive values written as a range.
pub const MIN_RANGE_LEN: usize = 3;

/// Fewest values a step pattern must explain.
pub const MIN_STEP_LEN: usize = 3;

/// Splits `selection` into the shortest ordered list of segments.
///
/// 1. An empty or full selection is a single [`Segment::Wildcard`].
/// 2. A selection that is exactly `offset, offset+d, …` through the end of
///    the domain (`d >= 2`, at least [`MIN_STEP_LEN`] values) is a single
///    [`Segment::Step`].
/// 3. Otherwise runs of [`MIN_RANGE_LEN`] or more consecutive values become
///    ranges and everything else single values.
///
/// # Errors
///
/// [`CronFieldError::ValueOutOfRange`](crate::CronFieldError::ValueOutOfRange)
/// if the selection holds a value outside `unit`'s domain.
pub fn parse(selection: &SelectionSet, unit: &UnitSpec) -> Result<Vec<Segment>> {
    selection.validate(unit)?;

    if selection.is_empty() || selection.is_full(unit) {
        return Ok(vec![Segment::Wildcard]);
    }

    if let Some(step) = find_step(selection, unit) {
        return Ok(vec![step]);
    }

    Ok(coalesce(selection))
}

/// Detects a selection fully explained by one step pattern.
fn find_step(values: &[u32], unit: &UnitSpec) -> Option<Segment> {
    if values.len() < MIN_STEP_LEN {
        return None;
    }
    let step = values[1] - values[0];
    if step < 2 {
        return None;
    }
    if !values.windows(2).all(|w| w[1] - w[0] == step) {
        return None;
    }
    let last = values[values.len() - 1];
    // The pattern must run to the end of the domain, otherwise `o/d` would
    // cover more than the selection.
    if last as u64 + step as u64 <= unit.max() as u64 {
        return None;
    }
    Some(Segment::step(values[0], step))
}

/// Greedy run-length grouping of sorted values.
fn coalesce(values: &[u32]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut i = 0;
    while i < values.len() {
        let mut j = i;
        while j + 1 < values.len() && values[j + 1] == values[j] + 1 {
            j += 1;
        }
        if j - i + 1 >= MIN_RANGE_LEN {
            segments.push(Segment::range(values[i], values[j]));
        } else {
            segments.extend(values[i..=j].iter().map(|&v| Segment::value(v)));
        }
        i = j + 1;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::segment::is_canonical;
    use crate::error::CronFieldError;

    fn set(values: &[u32]) -> SelectionSet {
        SelectionSet::from_values(values.iter().copied())
    }

    #[test]
    fn empty_selection_is_wildcard() {
        let segs = parse(&SelectionSet::new(), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::Wildcard]);
    }

    #[test]
    fn full_selection_is_wildcard() {
        let unit = UnitSpec::week_days();
        let segs = parse(&SelectionSet::full(&unit), &unit).unwrap();
        assert_eq!(segs, vec![Segment::Wildcard]);
    }

    #[test]
    fn every_fifth_minute_is_a_step() {
        let every_five: Vec<u32> = (0..60).step_by(5).collect();
        let segs = parse(&set(&every_five), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::step(0, 5)]);
    }

    #[test]
    fn offset_step_is_detected() {
        // 5, 20, 35, 50
        let segs = parse(&set(&[5, 20, 35, 50]), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::step(5, 15)]);
    }

    #[test]
    fn step_that_stops_early_is_a_list() {
        let segs = parse(&set(&[0, 10, 20]), &UnitSpec::minutes()).unwrap();
        assert_eq!(
            segs,
            vec![Segment::value(0), Segment::value(10), Segment::value(20)]
        );
    }

    #[test]
    fn two_values_never_form_a_step() {
        let segs = parse(&set(&[0, 30]), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::value(0), Segment::value(30)]);
    }

    #[test]
    fn three_consecutive_values_form_a_range() {
        let segs = parse(&set(&[3, 4, 5]), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::range(3, 5)]);
    }

    #[test]
    fn two_consecutive_values_stay_single() {
        let segs = parse(&set(&[3, 4]), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::value(3), Segment::value(4)]);
    }

    #[test]
    fn single_value_is_never_a_range() {
        let segs = parse(&set(&[42]), &UnitSpec::minutes()).unwrap();
        assert_eq!(segs, vec![Segment::value(42)]);
    }

    #[test]
    fn mixed_runs_are_ordered() {
        let segs = parse(&set(&[1, 2, 7, 8, 9, 10, 20, 40]), &UnitSpec::minutes()).unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::value(1),
                Segment::value(2),
                Segment::range(7, 10),
                Segment::value(20),
                Segment::value(40),
            ]
        );
        assert!(is_canonical(&segs, &UnitSpec::minutes()));
    }

    #[test]
    fn out_of_domain_selection_fails() {
        let err = parse(&set(&[0, 5]), &UnitSpec::months()).unwrap_err();
        assert!(matches!(err, CronFieldError::ValueOutOfRange { value: 0, .. }));
    }
}
