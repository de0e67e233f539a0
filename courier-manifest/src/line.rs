//! Parser for a single manifest record.

use courier_core::{Delivery, DeliveryId};
use geo::Coord;
use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, digit1, satisfy},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{delimited, preceded, separated_pair, tuple},
};

fn identifier(input: &str) -> IResult<&str, DeliveryId> {
    map_res(digit1, |digits: &str| digits.parse::<DeliveryId>())(input)
}

fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((opt(char('-')), digit1, char('.'), digit1))),
        |text: &str| text.parse::<f64>(),
    )(input)
}

fn coordinate(input: &str) -> IResult<&str, Coord<f64>> {
    map(
        delimited(
            char('('),
            separated_pair(decimal, char(','), decimal),
            char(')'),
        ),
        |(x, y)| Coord { x, y },
    )(input)
}

fn record(input: &str) -> IResult<&str, Delivery> {
    map(
        tuple((
            identifier,
            preceded(take_while1(|c: char| c.is_whitespace()), coordinate),
            preceded(satisfy(|c| c.is_whitespace()), coordinate),
        )),
        |(id, pickup, dropoff)| Delivery::new(id, pickup, dropoff),
    )(input)
}

/// Parse a whole line as a delivery record.
///
/// The id and pickup may be separated by any run of whitespace; pickup and
/// dropoff by exactly one whitespace character. Nothing may precede or follow
/// the record.
pub(crate) fn parse_record(line: &str) -> Option<Delivery> {
    all_consuming(record)(line)
        .ok()
        .map(|(_, delivery)| delivery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_a_record() {
        let delivery = parse_record(
            "1 (-9.100071078494038,-48.89301103772511) (-116.78442279683607,76.80147820713637)",
        )
        .expect("valid record");
        assert_eq!(delivery.id(), 1);
        assert_eq!(
            delivery.pickup(),
            Coord {
                x: -9.100071078494038,
                y: -48.89301103772511
            }
        );
        assert_eq!(
            delivery.dropoff(),
            Coord {
                x: -116.78442279683607,
                y: 76.80147820713637
            }
        );
    }

    #[rstest]
    fn accepts_a_run_of_whitespace_after_the_id() {
        let delivery = parse_record("12 \t (0.0,1.5) (2.5,-3.0)").expect("valid record");
        assert_eq!(delivery.id(), 12);
    }

    #[rstest]
    #[case::missing_parenthesis("1 (0.0,0.0 (1.0,1.0)")]
    #[case::integer_coordinate("1 (0,0.0) (1.0,1.0)")]
    #[case::leading_point("1 (.5,0.0) (1.0,1.0)")]
    #[case::exponent("1 (1.0e3,0.0) (1.0,1.0)")]
    #[case::negative_id("-1 (0.0,0.0) (1.0,1.0)")]
    #[case::space_inside_coordinate("1 (0.0, 0.0) (1.0,1.0)")]
    #[case::double_space_between_coordinates("1 (0.0,0.0)  (1.0,1.0)")]
    #[case::no_space_after_id("1(0.0,0.0) (1.0,1.0)")]
    #[case::trailing_text("1 (0.0,0.0) (1.0,1.0) extra")]
    #[case::leading_space(" 1 (0.0,0.0) (1.0,1.0)")]
    #[case::trailing_space("1 (0.0,0.0) (1.0,1.0) ")]
    #[case::missing_dropoff("1 (0.0,0.0)")]
    #[case::id_overflow("18446744073709551616 (0.0,0.0) (1.0,1.0)")]
    fn rejects_malformed_records(#[case] line: &str) {
        assert!(parse_record(line).is_none(), "accepted {line:?}");
    }

    #[rstest]
    fn parses_negative_zero_and_plain_values() {
        let delivery = parse_record("7 (-0.0,10.25) (3.5,0.0)").expect("valid record");
        assert_eq!(delivery.pickup().y, 10.25);
        assert_eq!(delivery.dropoff(), Coord { x: 3.5, y: 0.0 });
    }
}
