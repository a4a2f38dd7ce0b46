//! Hexagram identity: six lines, King Wen number, and the name table.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::kingwen::{king_wen_number, trigrams_for_number};
use crate::line::LineValue;
use crate::trigram::Trigram;

/// A hexagram: six cast lines (bottom first) and the King Wen number they
/// encode.
///
/// The number is always derived from the lines (including on
/// deserialization, which reads the bare line array), so the two fields
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[LineValue; 6]", from = "[LineValue; 6]")]
pub struct Hexagram {
    lines: [LineValue; 6],
    number: u8,
}

impl From<Hexagram> for [LineValue; 6] {
    fn from(hexagram: Hexagram) -> Self {
        hexagram.lines
    }
}

impl From<[LineValue; 6]> for Hexagram {
    fn from(lines: [LineValue; 6]) -> Self {
        Self::from_lines(lines)
    }
}

impl Hexagram {
    /// Build a hexagram from six lines, bottom line first.
    pub fn from_lines(lines: [LineValue; 6]) -> Self {
        Self {
            lines,
            number: king_wen_number(lines),
        }
    }

    /// Build a hexagram from raw ritual numbers, bottom line first.
    ///
    /// Fails on a slice that is not exactly six values or contains a value
    /// outside {6, 7, 8, 9}.
    pub fn try_from_values(values: &[u8]) -> CoreResult<Self> {
        let values: [u8; 6] = values
            .try_into()
            .map_err(|_| CoreError::InvalidLineCount(values.len()))?;
        let mut lines = [LineValue::YoungYin; 6];
        for (slot, value) in lines.iter_mut().zip(values) {
            *slot = LineValue::try_from(value)?;
        }
        Ok(Self::from_lines(lines))
    }

    /// Reconstruct the stable line pattern for a King Wen number (1..=64).
    pub fn from_number(number: u8) -> CoreResult<Self> {
        let (upper, lower) = trigrams_for_number(number)?;
        let mut lines = [LineValue::YoungYin; 6];
        for (i, yang) in lower.pattern().into_iter().enumerate() {
            lines[i] = if yang {
                LineValue::YoungYang
            } else {
                LineValue::YoungYin
            };
        }
        for (i, yang) in upper.pattern().into_iter().enumerate() {
            lines[i + 3] = if yang {
                LineValue::YoungYang
            } else {
                LineValue::YoungYin
            };
        }
        Ok(Self { lines, number })
    }

    /// The six lines, bottom first.
    pub fn lines(&self) -> [LineValue; 6] {
        self.lines
    }

    /// The King Wen number (1..=64).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The lower (inner) trigram, from lines 1-3.
    pub fn lower(&self) -> Trigram {
        Trigram::from_lines([self.lines[0], self.lines[1], self.lines[2]])
    }

    /// The upper (outer) trigram, from lines 4-6.
    pub fn upper(&self) -> Trigram {
        Trigram::from_lines([self.lines[3], self.lines[4], self.lines[5]])
    }

    /// 1-based positions of changing lines, in ascending order.
    pub fn changing_positions(&self) -> Vec<u8> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(i, _)| (i + 1) as u8)
            .collect()
    }

    /// The hexagram this one transforms into, or `None` when no line is
    /// changing.
    pub fn settled(&self) -> Option<Self> {
        if self.lines.iter().any(|line| line.is_changing()) {
            Some(Self::from_lines(self.lines.map(LineValue::settled)))
        } else {
            None
        }
    }

    /// The static identity record for this hexagram.
    pub fn info(&self) -> &'static HexagramInfo {
        // number is always valid by construction
        &INFO[(self.number - 1) as usize]
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.info();
        write!(f, "{} — {} ({})", self.number, info.name, info.chinese)
    }
}

/// Static identity data for one of the 64 hexagrams.
///
/// Identity only: the long judgment and image texts live in external
/// content datasets, not in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexagramInfo {
    /// King Wen number (1..=64).
    pub number: u8,
    /// English name (Wilhelm convention).
    pub name: &'static str,
    /// Chinese name.
    pub chinese: &'static str,
    /// Pinyin romanization.
    pub pinyin: &'static str,
}

impl HexagramInfo {
    /// Look up the record for a King Wen number.
    pub fn for_number(number: u8) -> CoreResult<&'static Self> {
        if (1..=64).contains(&number) {
            Ok(&INFO[(number - 1) as usize])
        } else {
            Err(CoreError::InvalidHexagramNumber(number))
        }
    }

    /// All 64 records in King Wen order.
    pub fn all() -> &'static [Self] {
        &INFO
    }
}

const INFO: [HexagramInfo; 64] = [
    HexagramInfo { number: 1, name: "The Creative", chinese: "乾", pinyin: "qián" },
    HexagramInfo { number: 2, name: "The Receptive", chinese: "坤", pinyin: "kūn" },
    HexagramInfo { number: 3, name: "Difficulty at the Beginning", chinese: "屯", pinyin: "zhūn" },
    HexagramInfo { number: 4, name: "Youthful Folly", chinese: "蒙", pinyin: "méng" },
    HexagramInfo { number: 5, name: "Waiting", chinese: "需", pinyin: "xū" },
    HexagramInfo { number: 6, name: "Conflict", chinese: "訟", pinyin: "sòng" },
    HexagramInfo { number: 7, name: "The Army", chinese: "師", pinyin: "shī" },
    HexagramInfo { number: 8, name: "Holding Together", chinese: "比", pinyin: "bǐ" },
    HexagramInfo { number: 9, name: "The Taming Power of the Small", chinese: "小畜", pinyin: "xiǎo chù" },
    HexagramInfo { number: 10, name: "Treading", chinese: "履", pinyin: "lǚ" },
    HexagramInfo { number: 11, name: "Peace", chinese: "泰", pinyin: "tài" },
    HexagramInfo { number: 12, name: "Standstill", chinese: "否", pinyin: "pǐ" },
    HexagramInfo { number: 13, name: "Fellowship with Men", chinese: "同人", pinyin: "tóng rén" },
    HexagramInfo { number: 14, name: "Possession in Great Measure", chinese: "大有", pinyin: "dà yǒu" },
    HexagramInfo { number: 15, name: "Modesty", chinese: "謙", pinyin: "qiān" },
    HexagramInfo { number: 16, name: "Enthusiasm", chinese: "豫", pinyin: "yù" },
    HexagramInfo { number: 17, name: "Following", chinese: "隨", pinyin: "suí" },
    HexagramInfo { number: 18, name: "Work on What Has Been Spoiled", chinese: "蠱", pinyin: "gǔ" },
    HexagramInfo { number: 19, name: "Approach", chinese: "臨", pinyin: "lín" },
    HexagramInfo { number: 20, name: "Contemplation", chinese: "觀", pinyin: "guān" },
    HexagramInfo { number: 21, name: "Biting Through", chinese: "噬嗑", pinyin: "shì kè" },
    HexagramInfo { number: 22, name: "Grace", chinese: "賁", pinyin: "bì" },
    HexagramInfo { number: 23, name: "Splitting Apart", chinese: "剝", pinyin: "bō" },
    HexagramInfo { number: 24, name: "Return", chinese: "復", pinyin: "fù" },
    HexagramInfo { number: 25, name: "Innocence", chinese: "無妄", pinyin: "wú wàng" },
    HexagramInfo { number: 26, name: "The Taming Power of the Great", chinese: "大畜", pinyin: "dà chù" },
    HexagramInfo { number: 27, name: "The Corners of the Mouth", chinese: "頤", pinyin: "yí" },
    HexagramInfo { number: 28, name: "Preponderance of the Great", chinese: "大過", pinyin: "dà guò" },
    HexagramInfo { number: 29, name: "The Abysmal", chinese: "坎", pinyin: "kǎn" },
    HexagramInfo { number: 30, name: "The Clinging", chinese: "離", pinyin: "lí" },
    HexagramInfo { number: 31, name: "Influence", chinese: "咸", pinyin: "xián" },
    HexagramInfo { number: 32, name: "Duration", chinese: "恆", pinyin: "héng" },
    HexagramInfo { number: 33, name: "Retreat", chinese: "遯", pinyin: "dùn" },
    HexagramInfo { number: 34, name: "The Power of the Great", chinese: "大壯", pinyin: "dà zhuàng" },
    HexagramInfo { number: 35, name: "Progress", chinese: "晉", pinyin: "jìn" },
    HexagramInfo { number: 36, name: "Darkening of the Light", chinese: "明夷", pinyin: "míng yí" },
    HexagramInfo { number: 37, name: "The Family", chinese: "家人", pinyin: "jiā rén" },
    HexagramInfo { number: 38, name: "Opposition", chinese: "睽", pinyin: "kuí" },
    HexagramInfo { number: 39, name: "Obstruction", chinese: "蹇", pinyin: "jiǎn" },
    HexagramInfo { number: 40, name: "Deliverance", chinese: "解", pinyin: "xiè" },
    HexagramInfo { number: 41, name: "Decrease", chinese: "損", pinyin: "sǔn" },
    HexagramInfo { number: 42, name: "Increase", chinese: "益", pinyin: "yì" },
    HexagramInfo { number: 43, name: "Breakthrough", chinese: "夬", pinyin: "guài" },
    HexagramInfo { number: 44, name: "Coming to Meet", chinese: "姤", pinyin: "gòu" },
    HexagramInfo { number: 45, name: "Gathering Together", chinese: "萃", pinyin: "cuì" },
    HexagramInfo { number: 46, name: "Pushing Upward", chinese: "升", pinyin: "shēng" },
    HexagramInfo { number: 47, name: "Oppression", chinese: "困", pinyin: "kùn" },
    HexagramInfo { number: 48, name: "The Well", chinese: "井", pinyin: "jǐng" },
    HexagramInfo { number: 49, name: "Revolution", chinese: "革", pinyin: "gé" },
    HexagramInfo { number: 50, name: "The Cauldron", chinese: "鼎", pinyin: "dǐng" },
    HexagramInfo { number: 51, name: "The Arousing", chinese: "震", pinyin: "zhèn" },
    HexagramInfo { number: 52, name: "Keeping Still", chinese: "艮", pinyin: "gèn" },
    HexagramInfo { number: 53, name: "Development", chinese: "漸", pinyin: "jiàn" },
    HexagramInfo { number: 54, name: "The Marrying Maiden", chinese: "歸妹", pinyin: "guī mèi" },
    HexagramInfo { number: 55, name: "Abundance", chinese: "豐", pinyin: "fēng" },
    HexagramInfo { number: 56, name: "The Wanderer", chinese: "旅", pinyin: "lǚ" },
    HexagramInfo { number: 57, name: "The Gentle", chinese: "巽", pinyin: "xùn" },
    HexagramInfo { number: 58, name: "The Joyous", chinese: "兌", pinyin: "duì" },
    HexagramInfo { number: 59, name: "Dispersion", chinese: "渙", pinyin: "huàn" },
    HexagramInfo { number: 60, name: "Limitation", chinese: "節", pinyin: "jié" },
    HexagramInfo { number: 61, name: "Inner Truth", chinese: "中孚", pinyin: "zhōng fú" },
    HexagramInfo { number: 62, name: "Preponderance of the Small", chinese: "小過", pinyin: "xiǎo guò" },
    HexagramInfo { number: 63, name: "After Completion", chinese: "既濟", pinyin: "jì jì" },
    HexagramInfo { number: 64, name: "Before Completion", chinese: "未濟", pinyin: "wèi jì" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(pattern: [u8; 6]) -> [LineValue; 6] {
        pattern.map(|v| LineValue::try_from(v).unwrap())
    }

    #[test]
    fn number_derived_from_lines() {
        let hex = Hexagram::from_lines(lines([7, 7, 7, 7, 7, 7]));
        assert_eq!(hex.number(), 1);
        assert_eq!(hex.info().name, "The Creative");
    }

    #[test]
    fn trigrams() {
        let hex = Hexagram::from_lines(lines([7, 7, 7, 8, 8, 8]));
        assert_eq!(hex.lower(), Trigram::Heaven);
        assert_eq!(hex.upper(), Trigram::Earth);
        assert_eq!(hex.number(), 11);
    }

    #[test]
    fn changing_positions_ascending_one_based() {
        let hex = Hexagram::from_lines(lines([9, 7, 8, 6, 7, 9]));
        assert_eq!(hex.changing_positions(), vec![1, 4, 6]);
    }

    #[test]
    fn no_changes_means_no_settled_hexagram() {
        let hex = Hexagram::from_lines(lines([7, 8, 7, 8, 7, 8]));
        assert!(hex.changing_positions().is_empty());
        assert!(hex.settled().is_none());
    }

    #[test]
    fn settled_flips_only_old_lines() {
        let hex = Hexagram::from_lines(lines([9, 7, 8, 6, 7, 7]));
        let settled = hex.settled().unwrap();
        assert_eq!(
            settled.lines().map(LineValue::value),
            [8, 7, 8, 7, 7, 7]
        );
        assert!(settled.changing_positions().is_empty());
    }

    #[test]
    fn all_old_yang_settles_into_the_receptive() {
        let hex = Hexagram::from_lines(lines([9, 9, 9, 9, 9, 9]));
        assert_eq!(hex.number(), 1);
        assert_eq!(hex.settled().unwrap().number(), 2);
    }

    #[test]
    fn try_from_values_validates() {
        assert!(Hexagram::try_from_values(&[7, 7, 7, 7, 7]).is_err());
        assert!(Hexagram::try_from_values(&[7, 7, 7, 7, 7, 5]).is_err());
        let hex = Hexagram::try_from_values(&[7, 8, 8, 8, 7, 8]).unwrap();
        assert_eq!(hex.number(), 3);
    }

    #[test]
    fn from_number_round_trips() {
        for n in 1..=64u8 {
            let hex = Hexagram::from_number(n).unwrap();
            assert_eq!(hex.number(), n);
            assert_eq!(king_wen_number(hex.lines()), n);
            assert!(hex.changing_positions().is_empty());
        }
        assert!(Hexagram::from_number(0).is_err());
    }

    #[test]
    fn info_table_is_in_king_wen_order() {
        for (i, info) in HexagramInfo::all().iter().enumerate() {
            assert_eq!(info.number as usize, i + 1);
        }
        assert_eq!(HexagramInfo::for_number(64).unwrap().name, "Before Completion");
        assert!(HexagramInfo::for_number(65).is_err());
    }

    #[test]
    fn display() {
        let hex = Hexagram::from_number(23).unwrap();
        assert_eq!(hex.to_string(), "23 — Splitting Apart (剝)");
    }

    #[test]
    fn serde_round_trip() {
        let hex = Hexagram::from_lines(lines([9, 7, 8, 6, 7, 7]));
        let json = serde_json::to_string(&hex).unwrap();
        let back: Hexagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hex);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_lines() -> impl Strategy<Value = [LineValue; 6]> {
            proptest::array::uniform6((6u8..=9).prop_map(|v| LineValue::try_from(v).unwrap()))
        }

        proptest! {
            #[test]
            fn number_always_in_range(lines in any_lines()) {
                let hex = Hexagram::from_lines(lines);
                prop_assert!((1..=64).contains(&hex.number()));
            }

            #[test]
            fn settled_present_iff_changes(lines in any_lines()) {
                let hex = Hexagram::from_lines(lines);
                prop_assert_eq!(
                    hex.settled().is_some(),
                    !hex.changing_positions().is_empty()
                );
            }

            #[test]
            fn settled_preserves_stable_lines(lines in any_lines()) {
                let hex = Hexagram::from_lines(lines);
                if let Some(settled) = hex.settled() {
                    for (before, after) in hex.lines().iter().zip(settled.lines()) {
                        if before.is_changing() {
                            prop_assert_eq!(after.is_yang(), !before.is_yang());
                        } else {
                            prop_assert_eq!(after, *before);
                        }
                    }
                }
            }
        }
    }
}
