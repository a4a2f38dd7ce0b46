//! Line generation and cast results.
//!
//! One cast draws six uniform values from the random source, one per line
//! from the bottom up, and maps each draw onto a line value through the
//! method's probability bands.
//!
//! The bands are cumulative, in the fixed order old yang, young yang,
//! young yin, old yin. For the yarrow-stalk ritual this yields the
//! traditional distribution 6 = 1/16, 7 = 5/16, 8 = 7/16, 9 = 3/16; for
//! three coins all four values are equally likely. The original web app
//! carried several mutually inconsistent copies of these bands — this
//! partition is the single canonical one.

use serde::{Deserialize, Serialize};

use zy_core::{Hexagram, LineValue, king_wen_number};

use crate::method::Method;
use crate::source::RandomSource;

/// Cumulative band boundaries for old yang, young yang, and young yin.
/// A draw at or above the last boundary is old yin.
const YARROW_BANDS: [f64; 3] = [3.0 / 16.0, 8.0 / 16.0, 15.0 / 16.0];
const COIN_BANDS: [f64; 3] = [0.25, 0.5, 0.75];

/// Map one uniform draw in `[0, 1)` onto a line value.
pub fn line_for_draw(method: Method, draw: f64) -> LineValue {
    let bands = match method {
        Method::YarrowStalks => YARROW_BANDS,
        Method::ThreeCoins => COIN_BANDS,
    };
    if draw < bands[0] {
        LineValue::OldYang
    } else if draw < bands[1] {
        LineValue::YoungYang
    } else if draw < bands[2] {
        LineValue::YoungYin
    } else {
        LineValue::OldYin
    }
}

/// The complete result of one cast.
///
/// Immutable once produced. The `transformed_*` fields are present exactly
/// when at least one line is changing, and are omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastResult {
    /// The six as-cast line values, bottom line first.
    pub lines: [LineValue; 6],
    /// 1-based positions of changing lines, in ascending order.
    pub changing_line_indices: Vec<u8>,
    /// King Wen number of the primary hexagram.
    pub primary_hexagram_number: u8,
    /// The settled lines, present iff any line is changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformed_lines: Option<[LineValue; 6]>,
    /// King Wen number of the transformed hexagram, present iff any line
    /// is changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformed_hexagram_number: Option<u8>,
}

impl CastResult {
    /// The primary hexagram.
    pub fn primary(&self) -> Hexagram {
        Hexagram::from_lines(self.lines)
    }

    /// The transformed (relating) hexagram, if any line is changing.
    pub fn transformed(&self) -> Option<Hexagram> {
        self.transformed_lines.map(Hexagram::from_lines)
    }

    /// Whether any line is changing.
    pub fn has_changes(&self) -> bool {
        !self.changing_line_indices.is_empty()
    }
}

/// Cast six lines with the given method, consuming six draws from the
/// source.
///
/// Pure given the source's draw sequence: the same draws always produce
/// the same result.
pub fn cast(method: Method, source: &mut dyn RandomSource) -> CastResult {
    let mut lines = [LineValue::YoungYin; 6];
    for line in &mut lines {
        *line = line_for_draw(method, source.next_unit());
    }

    let changing_line_indices: Vec<u8> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_changing())
        .map(|(i, _)| (i + 1) as u8)
        .collect();

    let (transformed_lines, transformed_hexagram_number) = if changing_line_indices.is_empty() {
        (None, None)
    } else {
        let settled = lines.map(LineValue::settled);
        (Some(settled), Some(king_wen_number(settled)))
    };

    CastResult {
        lines,
        changing_line_indices,
        primary_hexagram_number: king_wen_number(lines),
        transformed_lines,
        transformed_hexagram_number,
    }
}
