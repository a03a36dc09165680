//! Chord input parser — text fingering notation and JSON chord documents.

use std::str::FromStr;

use log::debug;

use crate::error::ChordError;
use crate::model::*;

/// Parse a fingering written as text.
///
/// Two notations are accepted:
/// - compact, one character per string: `x32010`
/// - separated by whitespace or commas, needed for frets >= 10:
///   `x 10 12 12 11 x`, `10,12,12,11,10,10`
pub fn parse_fingering(text: &str) -> Result<Fingering, ChordError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChordError::EmptyFingering);
    }

    let separated = text.contains(|c: char| c.is_whitespace() || c == ',');
    let positions = if separated {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        text.chars().map(parse_compact_char).collect::<Result<Vec<_>, _>>()?
    };

    if positions.is_empty() {
        return Err(ChordError::EmptyFingering);
    }
    Ok(Fingering::new(positions))
}

fn parse_token(token: &str) -> Result<FingerPosition, ChordError> {
    if token.eq_ignore_ascii_case("x") {
        return Ok(FingerPosition::Silent);
    }
    token
        .parse::<i32>()
        .map(FingerPosition::from)
        .map_err(|_| ChordError::InvalidFingering { token: token.to_string() })
}

fn parse_compact_char(c: char) -> Result<FingerPosition, ChordError> {
    match c {
        'x' | 'X' => Ok(FingerPosition::Silent),
        _ => c
            .to_digit(10)
            .map(|d| FingerPosition::from(d as i32))
            .ok_or_else(|| ChordError::InvalidFingering { token: c.to_string() }),
    }
}

impl FromStr for Fingering {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fingering(s)
    }
}

/// Parse a JSON chord document and validate its layout.
///
/// ```json
/// { "name": "C", "first_fret_offset": 0, "fingering": [-1, 3, 2, 0, 1, 0] }
/// ```
pub fn parse_chord_json(json: &str) -> Result<ChordDiagram, ChordError> {
    let chord: ChordDiagram = serde_json::from_str(json)?;
    chord.layout.validate()?;
    debug!(
        strings = chord.layout.string_count,
        frets = chord.layout.fret_count;
        "Parsed chord document '{}' ({})",
        chord.parameters.name,
        chord.fingering
    );
    Ok(chord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_notation() {
        let fingering = parse_fingering("x32010").unwrap();
        assert_eq!(fingering, Fingering::from(vec![-1, 3, 2, 0, 1, 0]));
    }

    #[test]
    fn separated_notation_with_two_digit_frets() {
        let fingering = parse_fingering(" x 10 12 12 11 x ").unwrap();
        assert_eq!(fingering, Fingering::from(vec![-1, 10, 12, 12, 11, -1]));

        let fingering = parse_fingering("10,12,12,11,10,10").unwrap();
        assert_eq!(fingering, Fingering::from(vec![10, 12, 12, 11, 10, 10]));

        let fingering = parse_fingering("-1 0 2").unwrap();
        assert_eq!(fingering, Fingering::from(vec![-1, 0, 2]));
    }

    #[test]
    fn display_parses_back() {
        for text in ["x32010", "x 10 12 12 11 x", "022100"] {
            let fingering: Fingering = text.parse().unwrap();
            assert_eq!(fingering.to_string(), text);
        }
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(matches!(
            parse_fingering("x3q010"),
            Err(ChordError::InvalidFingering { token }) if token == "q"
        ));
        assert!(matches!(
            parse_fingering("x 3 two"),
            Err(ChordError::InvalidFingering { token }) if token == "two"
        ));
        assert!(matches!(parse_fingering("   "), Err(ChordError::EmptyFingering)));
        assert!(matches!(parse_fingering(" , ,"), Err(ChordError::EmptyFingering)));
    }

    #[test]
    fn chord_json_with_defaults() {
        let chord = parse_chord_json(r#"{"name":"D","fingering":[-1,-1,0,2,3,2]}"#).unwrap();
        assert_eq!(chord.parameters.name, "D");
        assert_eq!(chord.parameters.first_fret_offset, 0);
        assert_eq!(chord.parameters.barre, None);
        assert_eq!(chord.fingering.to_string(), "xx0232");
        assert_eq!(chord.layout.string_count, 6);
    }

    #[test]
    fn chord_json_with_barre_and_layout() {
        let json = r#"{
            "name": "F",
            "first_fret_offset": 1,
            "barre": { "string_number": 0, "fret_number": 1 },
            "fingering": [1, 3, 3, 2, 1, 1],
            "layout": { "fret_count": 4 }
        }"#;
        let chord = parse_chord_json(json).unwrap();
        assert_eq!(chord.parameters.barre, Some(FingeredString::new(0, 1)));
        assert_eq!(chord.layout.fret_count, 4);
        assert_eq!(chord.layout.string_count, 6);
    }

    #[test]
    fn chord_json_errors() {
        assert!(matches!(parse_chord_json("{"), Err(ChordError::Json(_))));
        assert!(matches!(
            parse_chord_json(r#"{"name":"?","fingering":[],"layout":{"string_count":1}}"#),
            Err(ChordError::InvalidLayout(_))
        ));
    }
}
