//! Reading a field string back into a selection.
//!
//! Accepts everything [`serialize`](super::serialize) produces plus the usual
//! cron shorthands:
//!
//! ```text
//! field   := segment (',' segment)*
//! segment := '*' | base '/' step | every step | value '-' value | value
//! base    := '*' | value | value '-' value
//! value   := digits | altLabel | hour ('AM' | 'PM')
//! ```
//!
//! Labels are matched case-insensitively. Week day `7` is read as Sunday.

use crate::error::{CronFieldError, Result};
use crate::selection::SelectionSet;
use crate::unit::{UnitKind, UnitSpec};

use super::format::RenderOptions;

/// Parses `text` into a normalized selection (a full domain reads as empty).
pub fn parse_field(text: &str, unit: &UnitSpec, options: &RenderOptions) -> Result<SelectionSet> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(syntax(text, "empty field"));
    }

    let mut values = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(syntax(text, "empty segment"));
        }
        parse_segment(part, unit, options, &mut values)?;
    }

    if sunday_alias(unit) {
        values.iter_mut().filter(|v| **v == 7).for_each(|v| *v = 0);
    }
    Ok(SelectionSet::from_values(values).normalized(unit))
}

/// Week day domains `0..=6` also accept `7` for Sunday, folded after ranges
/// and steps are expanded so `5-7` reads as Friday to Sunday.
fn sunday_alias(unit: &UnitSpec) -> bool {
    unit.kind() == UnitKind::WeekDays && unit.contains(0) && !unit.contains(7)
}

fn parse_segment(
    part: &str,
    unit: &UnitSpec,
    options: &RenderOptions,
    out: &mut Vec<u32>,
) -> Result<()> {
    if let Some(step) = strip_every(part, &options.every_text) {
        let step = parse_step(step, part)?;
        out.extend(unit.values().step_by(step as usize));
        return Ok(());
    }

    if let Some((base, step)) = part.split_once('/') {
        let step = parse_step(step.trim(), part)?;
        let (start, end) = match base.trim() {
            "*" => (unit.min(), unit.max()),
            base => match base.split_once('-') {
                Some((a, b)) => parse_bounds(a, b, unit)?,
                None => (parse_value(base, unit)?, unit.max()),
            },
        };
        out.extend((start..=end).step_by(step as usize));
        return Ok(());
    }

    if part == "*" {
        out.extend(unit.values());
        return Ok(());
    }

    if let Some((a, b)) = part.split_once('-') {
        let (start, end) = parse_bounds(a, b, unit)?;
        out.extend(start..=end);
        return Ok(());
    }

    out.push(parse_value(part, unit)?);
    Ok(())
}

fn strip_every<'a>(part: &'a str, every_text: &str) -> Option<&'a str> {
    let every_text = every_text.trim();
    if every_text.is_empty() || part.len() <= every_text.len() {
        return None;
    }
    let head = part.get(..every_text.len())?;
    let tail = &part[every_text.len()..];
    if head.eq_ignore_ascii_case(every_text) && tail.starts_with(char::is_whitespace) {
        Some(tail.trim())
    } else {
        None
    }
}

fn parse_step(text: &str, part: &str) -> Result<u32> {
    let step: u32 = text
        .parse()
        .map_err(|_| syntax(part, "step is not a number"))?;
    if step == 0 {
        return Err(CronFieldError::InvalidStep(part.to_string()));
    }
    Ok(step)
}

fn parse_bounds(a: &str, b: &str, unit: &UnitSpec) -> Result<(u32, u32)> {
    let start = parse_value(a, unit)?;
    let end = parse_value(b, unit)?;
    if start > end {
        return Err(CronFieldError::InvalidRange { start, end });
    }
    Ok((start, end))
}

fn parse_value(token: &str, unit: &UnitSpec) -> Result<u32> {
    let token = token.trim();

    if let Ok(n) = token.parse::<u32>() {
        if n == 7 && sunday_alias(unit) {
            return Ok(n);
        }
        return unit.check(n);
    }

    if unit.kind() == UnitKind::Hours {
        if let Some(hour) = parse_clock_hour(token) {
            return unit.check(hour);
        }
    }

    if let Some(labels) = unit.alt_labels() {
        if let Some(index) = labels.iter().position(|l| l.eq_ignore_ascii_case(token)) {
            return Ok(unit.min() + index as u32);
        }
    }

    Err(syntax(token, "unknown value"))
}

/// `12AM` → 0, `1AM` → 1, `12PM` → 12, `11PM` → 23.
fn parse_clock_hour(token: &str) -> Option<u32> {
    if token.len() < 3 {
        return None;
    }
    let split = token.len() - 2;
    let digits = token.get(..split)?;
    let suffix = token.get(split..)?;
    let pm = if suffix.eq_ignore_ascii_case("PM") {
        true
    } else if suffix.eq_ignore_ascii_case("AM") {
        false
    } else {
        return None;
    };
    let hour: u32 = digits.trim().parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    })
}

fn syntax(input: &str, reason: &str) -> CronFieldError {
    CronFieldError::Syntax {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, unit: &UnitSpec) -> Result<SelectionSet> {
        parse_field(text, unit, &RenderOptions::default())
    }

    #[test]
    fn wildcard_reads_as_empty() {
        assert!(parse("*", &UnitSpec::minutes()).unwrap().is_empty());
    }

    #[test]
    fn list_and_ranges() {
        let set = parse("1,3-5,9", &UnitSpec::minutes()).unwrap();
        assert_eq!(set.as_slice(), &[1, 3, 4, 5, 9]);
    }

    #[test]
    fn star_step() {
        let set = parse("*/15", &UnitSpec::minutes()).unwrap();
        assert_eq!(set.as_slice(), &[0, 15, 30, 45]);
        let months = parse("*/3", &UnitSpec::months()).unwrap();
        assert_eq!(months.as_slice(), &[1, 4, 7, 10]);
    }

    #[test]
    fn offset_and_range_steps() {
        let unit = UnitSpec::minutes();
        assert_eq!(parse("20/30", &unit).unwrap().as_slice(), &[20, 50]);
        assert_eq!(parse("0-20/10", &unit).unwrap().as_slice(), &[0, 10, 20]);
    }

    #[test]
    fn humanized_step() {
        let set = parse("every 20", &UnitSpec::minutes()).unwrap();
        assert_eq!(set.as_slice(), &[0, 20, 40]);
        let set = parse("Every 20", &UnitSpec::minutes()).unwrap();
        assert_eq!(set.as_slice(), &[0, 20, 40]);
    }

    #[test]
    fn custom_every_text() {
        let o = RenderOptions::default().with_every_text("jede");
        let set = parse_field("jede 6", &UnitSpec::hours(), &o).unwrap();
        assert_eq!(set.as_slice(), &[0, 6, 12, 18]);
    }

    #[test]
    fn alt_labels_case_insensitive() {
        let set = parse("jan,Mar,DEC", &UnitSpec::months()).unwrap();
        assert_eq!(set.as_slice(), &[1, 3, 12]);
        let set = parse("MON-FRI", &UnitSpec::week_days()).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn clock_hours() {
        let set = parse("12AM,1PM-3PM", &UnitSpec::hours()).unwrap();
        assert_eq!(set.as_slice(), &[0, 13, 14, 15]);
        assert_eq!(parse("12pm", &UnitSpec::hours()).unwrap().as_slice(), &[12]);
    }

    #[test]
    fn zero_padded_values() {
        let set = parse("01-03,30", &UnitSpec::minutes()).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3, 30]);
    }

    #[test]
    fn sunday_as_seven() {
        let set = parse("5,7", &UnitSpec::week_days()).unwrap();
        assert_eq!(set.as_slice(), &[0, 5]);
    }

    #[test]
    fn week_day_ranges_ending_on_seven() {
        let days = UnitSpec::week_days();
        assert_eq!(parse("5-7", &days).unwrap().as_slice(), &[0, 5, 6]);
        assert_eq!(parse("FRI-7", &days).unwrap().as_slice(), &[0, 5, 6]);
        assert!(parse("1-7", &days).unwrap().is_empty());
        assert_eq!(parse("1-7/2", &days).unwrap().as_slice(), &[0, 1, 3, 5]);
        assert!(matches!(
            parse("7-1", &days),
            Err(CronFieldError::InvalidRange { start: 7, end: 1 })
        ));
        assert!(parse("8", &days).is_err());
    }

    #[test]
    fn seven_is_not_sunday_outside_week_days() {
        assert_eq!(parse("5-7", &UnitSpec::hours()).unwrap().as_slice(), &[5, 6, 7]);
        let one_based = UnitSpec::new(UnitKind::WeekDays, 1, 7).unwrap();
        assert_eq!(parse("7", &one_based).unwrap().as_slice(), &[7]);
    }

    #[test]
    fn full_domain_normalizes() {
        assert!(parse("0-6", &UnitSpec::week_days()).unwrap().is_empty());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let set = parse(" 1 , 2 ", &UnitSpec::minutes()).unwrap();
        assert_eq!(set.as_slice(), &[1, 2]);
    }

    #[test]
    fn errors() {
        let unit = UnitSpec::minutes();
        assert!(matches!(parse("", &unit), Err(CronFieldError::Syntax { .. })));
        assert!(matches!(parse("1,,2", &unit), Err(CronFieldError::Syntax { .. })));
        assert!(matches!(parse("abc", &unit), Err(CronFieldError::Syntax { .. })));
        assert!(matches!(parse("*/0", &unit), Err(CronFieldError::InvalidStep(_))));
        assert!(matches!(
            parse("9-3", &unit),
            Err(CronFieldError::InvalidRange { start: 9, end: 3 })
        ));
        assert!(matches!(
            parse("60", &unit),
            Err(CronFieldError::ValueOutOfRange { value: 60, .. })
        ));
        assert!(matches!(
            parse("13", &UnitSpec::months()),
            Err(CronFieldError::ValueOutOfRange { value: 13, .. })
        ));
    }
}
