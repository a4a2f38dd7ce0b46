//! The King Wen sequence lookup table.
//!
//! The traditional ordering of the 64 hexagrams does not follow the binary
//! value of the lines; it is a fixed table keyed by the (upper, lower)
//! trigram pair. The table below is the traditionally attested mapping
//! (e.g. 11 Tài is Earth over Heaven, 12 Pǐ is Heaven over Earth).

use crate::error::{CoreError, CoreResult};
use crate::line::LineValue;
use crate::trigram::Trigram;

/// King Wen numbers: `KING_WEN[upper.index()][lower.index()]`.
///
/// Rows are the upper trigram, columns the lower, both in the order
/// Earth, Mountain, Water, Wind, Thunder, Fire, Lake, Heaven.
const KING_WEN: [[u8; 8]; 8] = [
    // lower:  ☷   ☶   ☵   ☴   ☳   ☲   ☱   ☰
    [2, 15, 7, 46, 24, 36, 19, 11],   // upper Earth
    [23, 52, 4, 18, 27, 22, 41, 26],  // upper Mountain
    [8, 39, 29, 60, 3, 63, 48, 5],    // upper Water
    [20, 53, 59, 57, 42, 37, 61, 9],  // upper Wind
    [16, 62, 40, 32, 51, 55, 54, 34], // upper Thunder
    [35, 56, 64, 38, 21, 30, 50, 14], // upper Fire
    [45, 31, 47, 28, 17, 49, 58, 43], // upper Lake
    [12, 33, 6, 44, 25, 13, 10, 1],   // upper Heaven
];

/// Look up the King Wen number for an (upper, lower) trigram pair.
pub fn number_for_trigrams(upper: Trigram, lower: Trigram) -> u8 {
    KING_WEN[upper.index()][lower.index()]
}

/// Compute the King Wen number of six cast lines, bottom line first.
pub fn king_wen_number(lines: [LineValue; 6]) -> u8 {
    let lower = Trigram::from_lines([lines[0], lines[1], lines[2]]);
    let upper = Trigram::from_lines([lines[3], lines[4], lines[5]]);
    number_for_trigrams(upper, lower)
}

/// Find the (upper, lower) trigram pair for a King Wen number.
pub fn trigrams_for_number(number: u8) -> CoreResult<(Trigram, Trigram)> {
    for upper in Trigram::all() {
        for lower in Trigram::all() {
            if number_for_trigrams(*upper, *lower) == number {
                return Ok((*upper, *lower));
            }
        }
    }
    Err(CoreError::InvalidHexagramNumber(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(pattern: [u8; 6]) -> [LineValue; 6] {
        pattern.map(|v| LineValue::try_from(v).unwrap())
    }

    #[test]
    fn table_is_a_bijection_onto_1_through_64() {
        let mut seen = [false; 64];
        for row in &KING_WEN {
            for &n in row {
                assert!((1..=64).contains(&n));
                assert!(!seen[(n - 1) as usize], "number {n} appears twice");
                seen[(n - 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn pure_hexagrams() {
        assert_eq!(king_wen_number(lines([7, 7, 7, 7, 7, 7])), 1);
        assert_eq!(king_wen_number(lines([8, 8, 8, 8, 8, 8])), 2);
        assert_eq!(king_wen_number(lines([7, 8, 8, 8, 7, 8])), 3); // Thunder below Water
    }

    #[test]
    fn peace_and_standstill() {
        // 11 Tài: Heaven below, Earth above. 12 Pǐ: the reverse.
        assert_eq!(king_wen_number(lines([7, 7, 7, 8, 8, 8])), 11);
        assert_eq!(king_wen_number(lines([8, 8, 8, 7, 7, 7])), 12);
    }

    #[test]
    fn doubled_trigrams() {
        assert_eq!(number_for_trigrams(Trigram::Water, Trigram::Water), 29);
        assert_eq!(number_for_trigrams(Trigram::Fire, Trigram::Fire), 30);
        assert_eq!(number_for_trigrams(Trigram::Thunder, Trigram::Thunder), 51);
        assert_eq!(number_for_trigrams(Trigram::Mountain, Trigram::Mountain), 52);
        assert_eq!(number_for_trigrams(Trigram::Wind, Trigram::Wind), 57);
        assert_eq!(number_for_trigrams(Trigram::Lake, Trigram::Lake), 58);
    }

    #[test]
    fn completion_pair() {
        // 63 Jì Jì: Water over Fire. 64 Wèi Jì: Fire over Water.
        assert_eq!(number_for_trigrams(Trigram::Water, Trigram::Fire), 63);
        assert_eq!(number_for_trigrams(Trigram::Fire, Trigram::Water), 64);
    }

    #[test]
    fn old_lines_encode_their_cast_polarity() {
        // 9 is solid like 7, 6 is broken like 8.
        assert_eq!(king_wen_number(lines([9, 9, 9, 9, 9, 9])), 1);
        assert_eq!(king_wen_number(lines([6, 6, 6, 6, 6, 6])), 2);
    }

    #[test]
    fn inverse_lookup() {
        let (upper, lower) = trigrams_for_number(23).unwrap();
        assert_eq!(upper, Trigram::Mountain);
        assert_eq!(lower, Trigram::Earth);
        assert!(trigrams_for_number(0).is_err());
        assert!(trigrams_for_number(65).is_err());
    }

    #[test]
    fn inverse_round_trips_every_number() {
        for n in 1..=64u8 {
            let (upper, lower) = trigrams_for_number(n).unwrap();
            assert_eq!(number_for_trigrams(upper, lower), n);
        }
    }
}
