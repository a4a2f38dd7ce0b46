//! The eight trigrams (bagua) and their traditional associations.

use serde::{Deserialize, Serialize};

use crate::line::LineValue;

/// One of the eight trigrams, identified by its three-line yin/yang pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ Kūn — three yin lines.
    Earth,
    /// ☶ Gèn — yang on top only.
    Mountain,
    /// ☵ Kǎn — yang in the middle only.
    Water,
    /// ☴ Xùn — yin at the bottom only.
    Wind,
    /// ☳ Zhèn — yang at the bottom only.
    Thunder,
    /// ☲ Lí — yin in the middle only.
    Fire,
    /// ☱ Duì — yin on top only.
    Lake,
    /// ☰ Qián — three yang lines.
    Heaven,
}

impl Trigram {
    /// Derive the trigram from three lines, bottom line first.
    pub fn from_lines(lines: [LineValue; 3]) -> Self {
        let [bottom, middle, top] = lines.map(LineValue::is_yang);
        match (bottom, middle, top) {
            (false, false, false) => Self::Earth,
            (false, false, true) => Self::Mountain,
            (false, true, false) => Self::Water,
            (false, true, true) => Self::Wind,
            (true, false, false) => Self::Thunder,
            (true, false, true) => Self::Fire,
            (true, true, false) => Self::Lake,
            (true, true, true) => Self::Heaven,
        }
    }

    /// The yin/yang pattern of this trigram, bottom line first
    /// (`true` = yang).
    pub fn pattern(self) -> [bool; 3] {
        match self {
            Self::Earth => [false, false, false],
            Self::Mountain => [false, false, true],
            Self::Water => [false, true, false],
            Self::Wind => [false, true, true],
            Self::Thunder => [true, false, false],
            Self::Fire => [true, false, true],
            Self::Lake => [true, true, false],
            Self::Heaven => [true, true, true],
        }
    }

    /// The English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Earth => "Earth",
            Self::Mountain => "Mountain",
            Self::Water => "Water",
            Self::Wind => "Wind",
            Self::Thunder => "Thunder",
            Self::Fire => "Fire",
            Self::Lake => "Lake",
            Self::Heaven => "Heaven",
        }
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Earth => "坤",
            Self::Mountain => "艮",
            Self::Water => "坎",
            Self::Wind => "巽",
            Self::Thunder => "震",
            Self::Fire => "離",
            Self::Lake => "兌",
            Self::Heaven => "乾",
        }
    }

    /// The pinyin romanization.
    pub fn pinyin(self) -> &'static str {
        match self {
            Self::Earth => "kūn",
            Self::Mountain => "gèn",
            Self::Water => "kǎn",
            Self::Wind => "xùn",
            Self::Thunder => "zhèn",
            Self::Fire => "lí",
            Self::Lake => "duì",
            Self::Heaven => "qián",
        }
    }

    /// The traditional attribute.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Earth => "Receptive, Yielding",
            Self::Mountain => "Still, Stopping",
            Self::Water => "Dangerous, Flowing",
            Self::Wind => "Gentle, Penetrating",
            Self::Thunder => "Arousing, Shocking",
            Self::Fire => "Light-giving, Clinging",
            Self::Lake => "Joyous, Open",
            Self::Heaven => "Strong, Creative",
        }
    }

    /// The associated element.
    pub fn element(self) -> &'static str {
        match self {
            Self::Earth | Self::Mountain => "Earth",
            Self::Water => "Water",
            Self::Wind | Self::Thunder => "Wood",
            Self::Fire => "Fire",
            Self::Lake | Self::Heaven => "Metal",
        }
    }

    /// The natural image.
    pub fn image(self) -> &'static str {
        match self {
            Self::Earth => "Earth, Ground",
            Self::Mountain => "Mountain",
            Self::Water => "Water, Stream",
            Self::Wind => "Wind, Tree",
            Self::Thunder => "Thunder, Lightning",
            Self::Fire => "Fire, Sun",
            Self::Lake => "Lake, Marsh",
            Self::Heaven => "Heaven, Sky",
        }
    }

    /// All eight trigrams in table-row order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Earth,
            Self::Mountain,
            Self::Water,
            Self::Wind,
            Self::Thunder,
            Self::Fire,
            Self::Lake,
            Self::Heaven,
        ]
    }

    /// Row/column index into the King Wen table.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Earth => 0,
            Self::Mountain => 1,
            Self::Water => 2,
            Self::Wind => 3,
            Self::Thunder => 4,
            Self::Fire => 5,
            Self::Lake => 6,
            Self::Heaven => 7,
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.chinese())
    }
}
