use nom::{
    bytes::complete::tag,
    character::complete::{char, i64 as integer, multispace0, multispace1, space0},
    combinator::all_consuming,
    error::Error as NomError,
    multi::separated_list0,
    sequence::{delimited, pair, preceded},
    Finish, IResult,
};
use thiserror::Error;

use crate::{coverage::CoverageIndex, point::Point};

#[derive(Debug, Error)]
#[error("malformed sensor report: {0}")]
pub struct ParseError(#[from] NomError<String>);

fn padded<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(space0, inner, space0)
}

/// `x=-2`, with optional blanks around the `=`.
fn axis<'a>(name: char) -> impl FnMut(&'a str) -> IResult<&'a str, i64> {
    preceded(pair(char(name), padded(char('='))), integer)
}

fn location(input: &str) -> IResult<&str, Point> {
    let (input, x) = axis('x')(input)?;
    let (input, _) = padded(char(','))(input)?;
    let (input, y) = axis('y')(input)?;

    Ok((input, Point::new(x, y)))
}

/// One `Sensor at ...: closest beacon is at ...` line.
fn reading(input: &str) -> IResult<&str, (Point, Point)> {
    let (input, sensor) = preceded(padded(tag("Sensor at")), location)(input)?;
    let (input, _) = padded(char(':'))(input)?;
    let (input, beacon) = preceded(padded(tag("closest beacon is at")), location)(input)?;

    Ok((input, (sensor, beacon)))
}

/// Parses a whole report into `(sensor, closest beacon)` pairs, one per line.
pub fn readings(input: &str) -> Result<Vec<(Point, Point)>, ParseError> {
    all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, reading),
        multispace0,
    ))(input)
    .finish()
    .map(|(_, readings)| readings)
    .map_err(|e| NomError::new(e.input.to_string(), e.code).into())
}

pub fn coverage_index(input: &str) -> Result<CoverageIndex, ParseError> {
    readings(input).map(CoverageIndex::from_readings)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Sensor at x=2, y=18: closest beacon is at x=-2, y=15", (2, 18), (-2, 15))]
    #[case("Sensor at x=+0, y=0: closest beacon is at x=0, y=-1", (0, 0), (0, -1))]
    #[case(
        "  Sensor at x = 3999, y=-4000000 :  closest beacon is at x=1, y=2  ",
        (3999, -4_000_000),
        (1, 2)
    )]
    fn parses_single_line(#[case] line: &str, #[case] sensor: (i64, i64), #[case] beacon: (i64, i64)) {
        assert_eq!(readings(line).unwrap(), vec![(sensor.into(), beacon.into())]);
    }

    #[test]
    fn parses_several_lines() {
        let input = "\nSensor at x=2, y=18: closest beacon is at x=-2, y=15\n\n\
                     Sensor at x=9, y=16: closest beacon is at x=10, y=16\n";

        let parsed = readings(input).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], (Point::new(9, 16), Point::new(10, 16)));
    }

    #[test]
    fn accepts_missing_trailing_newline() {
        assert_eq!(
            readings("Sensor at x=1, y=1: closest beacon is at x=1, y=2").unwrap().len(),
            1
        );
    }

    #[test]
    fn empty_report_has_no_readings() {
        assert!(readings("").unwrap().is_empty());
        assert!(coverage_index(" \n ").unwrap().is_empty());
    }

    #[rstest]
    #[case("Sensor at x=2, y=18")]
    #[case("Sensor at x=, y=18: closest beacon is at x=-2, y=15")]
    #[case("Sensor at x=99999999999999999999, y=0: closest beacon is at x=0, y=0")]
    #[case("Sensor at x=2, y=18: closest beacon is at x=-2, y=15 trailing")]
    #[case("Beacon at x=2, y=18: closest sensor is at x=-2, y=15")]
    fn rejects_malformed_input(#[case] input: &str) {
        assert!(readings(input).is_err());
    }

    #[test]
    fn error_names_the_offending_input() {
        let err = readings("Sensor at x=1, y=1: closest beacon is at x=1, y=2\nbogus").unwrap_err();

        assert!(err.to_string().contains("bogus"), "{err}");
    }
}
